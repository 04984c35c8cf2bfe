//! The interactive menu loops.

use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use linkvault_core::catalog::{CatalogError, CatalogRepository};
use linkvault_core::nav::{CatalogCursor, LinkView, SearchPager, Selection};
use linkvault_core::scoring::TrustScoringEngine;
use linkvault_core::search::{format_size, TorrentResult, TorrentSearcher};
use linkvault_core::store::{ActivityStore, FavoriteOutcome};
use linkvault_core::{AccessGate, NodeKind};

use crate::ui;

pub struct App {
    repository: CatalogRepository,
    searcher: Arc<dyn TorrentSearcher>,
    engine: TrustScoringEngine,
    store: Arc<dyn ActivityStore>,
    gate: AccessGate,
}

impl App {
    pub fn new(
        repository: CatalogRepository,
        searcher: Arc<dyn TorrentSearcher>,
        engine: TrustScoringEngine,
        store: Arc<dyn ActivityStore>,
        gate: AccessGate,
    ) -> Self {
        Self {
            repository,
            searcher,
            engine,
            store,
            gate,
        }
    }

    pub async fn run(&self) -> Result<()> {
        if !self.check_gate().await {
            ui::problem("Access denied.");
            return Ok(());
        }

        loop {
            ui::clear_screen();
            ui::banner();
            ui::headline("AUTHORIZED OPERATORS ONLY");
            ui::line("");
            ui::line("1 - Browse catalog");
            ui::line("2 - Search torrents");
            ui::line("3 - Favorites");
            ui::line("4 - History");
            ui::line("0 - End session");

            let choice = match ui::prompt("\nChoose an option:").await {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "0" => break,
                "1" => self.browse().await,
                "2" => self.search().await,
                "3" => self.favorites().await,
                "4" => self.history().await,
                _ => {
                    ui::problem("Invalid option.");
                    ui::pause().await;
                }
            }
        }

        ui::notice("Session closed.");
        Ok(())
    }

    /// Verify the configured passphrase, with a few attempts.
    async fn check_gate(&self) -> bool {
        if !self.gate.required() {
            return true;
        }

        ui::clear_screen();
        ui::banner();
        for _ in 0..3 {
            match ui::prompt("Passphrase:").await {
                Some(input) if self.gate.verify(&input) => return true,
                Some(_) => ui::problem("Wrong passphrase."),
                None => return false,
            }
        }
        false
    }

    async fn browse(&self) {
        let tree = match self.repository.get_catalog().await {
            Ok(tree) => tree,
            Err(CatalogError::Unavailable) => {
                ui::problem("Catalog unavailable: fetch failed and no cached copy exists.");
                ui::pause().await;
                return;
            }
            Err(e) => {
                ui::problem(&format!("Could not load the catalog: {}", e));
                ui::pause().await;
                return;
            }
        };

        let mut cursor = CatalogCursor::new(&tree, &*self.store);

        loop {
            ui::clear_screen();
            ui::banner();
            if cursor.depth() > 0 {
                ui::line(&cursor.path_display());
            }
            ui::line("\nWhat do you want to open?");

            let entries = cursor.entries();
            for (i, (label, kind)) in entries.iter().enumerate() {
                let tag = match kind {
                    NodeKind::Folder => "[Folder]".to_string(),
                    NodeKind::Link => "[Link]".to_string(),
                    NodeKind::List(n) => format!("[{} links]", n),
                };
                ui::line(&format!("{} - {} {}", i + 1, label, tag));
            }
            ui::line(if cursor.depth() > 0 { "0 - Back" } else { "0 - Exit" });

            let input = match ui::prompt("\nChoose an option:").await {
                Some(input) => input,
                None => return,
            };

            let Some(index) = ui::parse_index(&input) else {
                ui::problem("Type a number.");
                ui::pause().await;
                continue;
            };

            if index == 0 {
                if !cursor.back() {
                    return;
                }
                continue;
            }

            match cursor.select(index) {
                Ok(Selection::Folder) => {}
                Ok(Selection::Links(view)) => self.links_screen(&view).await,
                Err(e) => {
                    ui::problem(&e.to_string());
                    ui::pause().await;
                }
            }
        }
    }

    async fn links_screen(&self, view: &LinkView<'_>) {
        loop {
            ui::clear_screen();
            ui::banner();
            ui::line(&view.path);
            ui::headline(&format!("\n=== {} ===", view.title));

            for (i, link) in view.links.iter().enumerate() {
                ui::line(&format!("{}. {}", i + 1, link.url));
                if let Some(description) = &link.description {
                    ui::line(&format!("   -> {}", description));
                }
            }
            ui::line("\nC - Copy URL | F - Favorite | V - Back");

            let choice = match ui::prompt("\nChoose an option:").await {
                Some(choice) => choice.to_uppercase(),
                None => return,
            };

            match choice.as_str() {
                "V" => return,
                "C" => {
                    if let Some(link) = self.ask_link(view).await {
                        ui::success("Copy the URL below:");
                        ui::headline(&link.url);
                        ui::pause().await;
                    }
                }
                "F" => {
                    if let Some(link) = self.ask_link(view).await {
                        self.add_favorite(&link.url, view.title, &view.path).await;
                    }
                }
                _ => {
                    ui::problem("Invalid option.");
                    ui::pause().await;
                }
            }
        }
    }

    /// Ask for a 1-based link number on the current view.
    async fn ask_link<'a>(
        &self,
        view: &LinkView<'a>,
    ) -> Option<&'a linkvault_core::LinkEntry> {
        let input = ui::prompt("Link number:").await?;
        let index = match ui::parse_index(&input) {
            Some(index) => index,
            None => {
                ui::problem("Type a number.");
                ui::pause().await;
                return None;
            }
        };
        match view.link(index) {
            Ok(link) => Some(link),
            Err(e) => {
                ui::problem(&e.to_string());
                ui::pause().await;
                None
            }
        }
    }

    async fn add_favorite(&self, url: &str, title: &str, category_path: &str) {
        match self.store.add_favorite(url, title, category_path) {
            Ok(FavoriteOutcome::Added) => ui::success("Link added to favorites."),
            Ok(FavoriteOutcome::Duplicate) => ui::problem("This link is already a favorite."),
            Err(e) => {
                warn!(error = %e, "favorite write failed");
                ui::problem("Could not save the favorite.");
            }
        }
        ui::pause().await;
    }

    async fn search(&self) {
        ui::clear_screen();
        ui::banner();
        ui::headline("TORRENT SEARCH");

        let term = match ui::prompt("\nSearch term:").await {
            Some(term) if !term.is_empty() => term,
            Some(_) => {
                ui::problem("Search term cannot be empty.");
                ui::pause().await;
                return;
            }
            None => return,
        };

        ui::notice("Searching...");
        let results = match self.searcher.search(&term).await {
            Ok(results) => results,
            Err(e) => {
                ui::problem(&format!("Search failed: {}", e));
                ui::pause().await;
                return;
            }
        };

        if results.is_empty() {
            ui::problem("No results found.");
            ui::pause().await;
            return;
        }

        let mut pager = SearchPager::new(results);

        loop {
            ui::clear_screen();
            ui::banner();
            ui::headline(&format!(
                "Results for {:?} - page {}/{} ({} total)",
                term,
                pager.page(),
                pager.page_count(),
                pager.total()
            ));
            ui::line("");

            for (number, result) in pager.current_page() {
                let verdict = self.engine.score(result);
                ui::line(&format!(
                    "{}. {} [{} | seeds {} | {} ({})]",
                    number,
                    result.name,
                    format_size(result.size_bytes),
                    result.seeders,
                    verdict.score,
                    verdict.tier().label(),
                ));
            }

            ui::line("\nN - Next page | P - Previous page | number - Details | V - Back");
            let choice = match ui::prompt("\nChoose an option:").await {
                Some(choice) => choice.to_uppercase(),
                None => return,
            };

            match choice.as_str() {
                "V" => return,
                "N" => {
                    if !pager.next() {
                        ui::problem("Already on the last page.");
                        ui::pause().await;
                    }
                }
                "P" => {
                    if !pager.prev() {
                        ui::problem("Already on the first page.");
                        ui::pause().await;
                    }
                }
                other => match ui::parse_index(other) {
                    Some(index) => match pager.select(index) {
                        Ok(result) => self.result_detail(result, &term).await,
                        Err(e) => {
                            ui::problem(&e.to_string());
                            ui::pause().await;
                        }
                    },
                    None => {
                        ui::problem("Invalid option.");
                        ui::pause().await;
                    }
                },
            }
        }
    }

    async fn result_detail(&self, result: &TorrentResult, term: &str) {
        let verdict = self.engine.score(result);
        let tier = verdict.tier();

        ui::clear_screen();
        ui::banner();
        ui::headline(&result.name);
        ui::line("");
        ui::line(&format!("Size:     {}", format_size(result.size_bytes)));
        ui::line(&format!(
            "Swarm:    {} seeders / {} leechers",
            result.seeders, result.leechers
        ));
        if let Some(added) = result.added_at {
            ui::line(&format!("Added:    {}", added.format("%Y-%m-%d")));
        }
        ui::line(&format!("Magnet:   {}", result.magnet_uri()));
        ui::line("");
        ui::headline(&format!("Trust score: {}/100 - {}", verdict.score, tier.label()));
        if let Some(group) = &verdict.detected_group {
            ui::line(&format!(
                "Release group: {} ({} / {})",
                group,
                verdict.detected_category.as_deref().unwrap_or("?"),
                verdict.detected_subcategory.as_deref().unwrap_or("?"),
            ));
        }
        for alert in &verdict.alerts {
            ui::problem(alert);
        }
        ui::line("");
        for recommendation in tier.recommendations() {
            ui::notice(recommendation);
        }

        ui::line("\nF - Favorite magnet | V - Back");
        match ui::prompt("\nChoose an option:").await {
            Some(choice) if choice.eq_ignore_ascii_case("f") => {
                let category = format!("TORRENTS > {}", term);
                self.add_favorite(&result.magnet_uri(), &result.name, &category)
                    .await;
            }
            _ => {}
        }
    }

    async fn favorites(&self) {
        loop {
            ui::clear_screen();
            ui::banner();
            ui::headline("=== FAVORITES ===");

            let favorites = match self.store.list_favorites() {
                Ok(favorites) => favorites,
                Err(e) => {
                    warn!(error = %e, "favorites read failed");
                    ui::problem("Could not read favorites.");
                    ui::pause().await;
                    return;
                }
            };

            if favorites.is_empty() {
                ui::problem("No favorites yet.");
                ui::pause().await;
                return;
            }

            for (i, favorite) in favorites.iter().enumerate() {
                ui::line(&format!("\n{}. {}", i + 1, favorite.title));
                ui::line(&format!("   Category: {}", favorite.category_path));
                ui::line(&format!("   URL: {}", favorite.url));
                ui::line(&format!(
                    "   Added: {}",
                    favorite.added_at.format("%Y-%m-%d %H:%M")
                ));
            }

            ui::line("\nR - Remove favorite | V - Back");
            let choice = match ui::prompt("\nChoose an option:").await {
                Some(choice) => choice.to_uppercase(),
                None => return,
            };

            match choice.as_str() {
                "V" => return,
                "R" => {
                    let Some(input) = ui::prompt("Favorite number:").await else {
                        continue;
                    };
                    match ui::parse_index(&input) {
                        Some(index) if index >= 1 && index <= favorites.len() => {
                            match self.store.remove_favorite(&favorites[index - 1].url) {
                                Ok(()) => ui::success("Favorite removed."),
                                Err(e) => {
                                    warn!(error = %e, "favorite removal failed");
                                    ui::problem("Could not remove the favorite.");
                                }
                            }
                            ui::pause().await;
                        }
                        _ => {
                            ui::problem("Invalid number.");
                            ui::pause().await;
                        }
                    }
                }
                _ => {
                    ui::problem("Invalid option.");
                    ui::pause().await;
                }
            }
        }
    }

    async fn history(&self) {
        ui::clear_screen();
        ui::banner();
        ui::headline("=== RECENT HISTORY ===");

        let recent = match self.store.recent_paths(10) {
            Ok(recent) => recent,
            Err(e) => {
                warn!(error = %e, "history read failed");
                ui::problem("Could not read the history.");
                ui::pause().await;
                return;
            }
        };

        if recent.is_empty() {
            ui::problem("No history yet.");
            ui::pause().await;
            return;
        }

        for (i, entry) in recent.iter().enumerate() {
            ui::line(&format!("\n{}. {}", i + 1, entry.path));
            ui::line(&format!(
                "   Last visit: {} ({} visits)",
                entry.last_visit.format("%Y-%m-%d %H:%M"),
                entry.visit_count
            ));
        }

        ui::line("\nC - Clear history | V - Back");
        match ui::prompt("\nChoose an option:").await {
            Some(choice) if choice.eq_ignore_ascii_case("c") => {
                match self.store.clear_history() {
                    Ok(()) => ui::success("History cleared."),
                    Err(e) => {
                        warn!(error = %e, "history clear failed");
                        ui::problem("Could not clear the history.");
                    }
                }
                ui::pause().await;
            }
            _ => {}
        }
    }
}
