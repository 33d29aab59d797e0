//! Demo order records for the routing console preview
//!
//! These are static literals. There is no write path; a real read endpoint
//! would replace [`demo_orders`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const MISSING: &str = "—";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub country: String,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub size: Option<String>,
}

/// Provider the order was routed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAssignment {
    pub name: String,
    pub eta_days: u32,
    pub cost: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Received,
    Routed,
    InFulfillment,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::Routed => "routed",
            OrderStatus::InFulfillment => "in_fulfillment",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Received => "Received",
            OrderStatus::Routed => "Routed",
            OrderStatus::InFulfillment => "In fulfillment",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub qty: u32,
    pub material: String,
    pub address: Address,
    pub preferences: Option<Preferences>,
    pub provider: Option<ProviderAssignment>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub tracking_url: Option<String>,
}

impl Order {
    /// "Stockholm, Sweden" or just the country
    pub fn destination_label(&self) -> String {
        match &self.address.city {
            Some(city) => format!("{}, {}", city, self.address.country),
            None => self.address.country.clone(),
        }
    }

    /// "500 × A3 poster"
    pub fn quantity_label(&self) -> String {
        format!("{} × {}", self.qty, self.material)
    }

    pub fn provider_label(&self) -> String {
        self.provider
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| MISSING.to_string())
    }

    /// "3 days", or a dash when unrouted or zero
    pub fn eta_label(&self) -> String {
        match &self.provider {
            Some(p) if p.eta_days > 0 => format!("{} days", p.eta_days),
            _ => MISSING.to_string(),
        }
    }

    /// "120 EUR", rounded to whole units
    pub fn cost_label(&self) -> String {
        match &self.provider {
            Some(p) if p.cost != 0.0 => format!("{:.0} {}", p.cost, p.currency),
            _ => MISSING.to_string(),
        }
    }

    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

/// The two demo orders shown in the console, relative to `now`
pub fn demo_orders(now: DateTime<Utc>) -> Vec<Order> {
    vec![
        Order {
            id: "demo-1".to_string(),
            qty: 500,
            material: "A3 poster".to_string(),
            address: Address {
                country: "Sweden".to_string(),
                city: Some("Stockholm".to_string()),
            },
            preferences: Some(Preferences {
                kind: Some("large-format".to_string()),
                size: Some("A3".to_string()),
            }),
            provider: Some(ProviderAssignment {
                name: "Local Provider".to_string(),
                eta_days: 3,
                cost: 120.0,
                currency: "EUR".to_string(),
            }),
            status: OrderStatus::InFulfillment,
            created_at: now,
            tracking_url: Some("https://tracking.theprintroute.test/demo-1".to_string()),
        },
        Order {
            id: "demo-2".to_string(),
            qty: 1000,
            material: "Flyers".to_string(),
            address: Address {
                country: "Germany".to_string(),
                city: Some("Berlin".to_string()),
            },
            preferences: Some(Preferences {
                kind: Some("marketing".to_string()),
                size: Some("A5".to_string()),
            }),
            provider: Some(ProviderAssignment {
                name: "Global Provider".to_string(),
                eta_days: 5,
                cost: 90.0,
                currency: "EUR".to_string(),
            }),
            status: OrderStatus::Routed,
            created_at: now - Duration::days(1),
            tracking_url: None,
        },
    ]
}
