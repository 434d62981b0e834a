//! Order acknowledgment types.
//!
//! Orders are not modeled: the order endpoint accepts any request body,
//! inspects nothing, records nothing, and answers with a constant
//! acknowledgment. The only order-shaped state in the process is an
//! observability counter.

use serde::{Deserialize, Serialize};

/// The constant acknowledgment message.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully";

/// Response body for a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAck {
    /// Acknowledgment message.
    pub message: String,
}

impl OrderAck {
    /// The acknowledgment every order receives.
    pub fn placed() -> Self {
        Self {
            message: ORDER_PLACED_MESSAGE.to_string(),
        }
    }
}
