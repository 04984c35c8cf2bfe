//! Operator access gate.
//!
//! When a passphrase is configured, the front end must verify it before
//! showing the main menu. Without one, the gate is open.

/// Startup gate backed by an optional configured passphrase.
pub struct AccessGate {
    passphrase: Option<String>,
}

impl AccessGate {
    pub fn new(passphrase: Option<String>) -> Self {
        Self { passphrase }
    }

    /// Whether the operator has to present a passphrase at all.
    pub fn required(&self) -> bool {
        self.passphrase.is_some()
    }

    /// Check a presented passphrase. Always true for an open gate.
    pub fn verify(&self, presented: &str) -> bool {
        match &self.passphrase {
            Some(expected) => constant_time_eq(presented.as_bytes(), expected.as_bytes()),
            None => true,
        }
    }
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
