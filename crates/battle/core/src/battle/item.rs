//! Consumable item seam.
//!
//! Items live outside the battle core. The controller forwards a request to
//! the injected service and logs whatever message comes back; it never
//! interprets the result and using an item never spends the turn.

use crate::combatant::Combatant;

/// Result reported by the item subsystem.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemResult {
    pub success: bool,
    pub message: String,
}

impl ItemResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Applies a named item to a combatant.
pub trait ItemService: Send {
    fn use_item(&mut self, name: &str, target: &mut Combatant) -> ItemResult;
}
