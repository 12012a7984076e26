//! Constant sample data shown by the read-only dashboard tabs.

pub mod architecture;
pub mod infrastructure;
pub mod monitoring;

/// Health shown on a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Active,
    Healthy,
}

impl Health {
    pub fn label(self) -> &'static str {
        match self {
            Health::Active => "active",
            Health::Healthy => "healthy",
        }
    }
}

/// Titled note rendered as a coloured card.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    pub title: &'static str,
    pub body: &'static str,
}
