#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! These tests verify that cart mutations and navigation emit structured
//! events through `tracing` when the app runs under a subscriber.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use storefront_app::catalog_data::default_catalog;
use storefront_app::{Msg, StorefrontApp};
use storefront_runtime::ProgramSimulator;

use tracing_subscriber::layer::SubscriberExt;

/// A captured event with its fields.
#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records every event.
struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl EventCapture {
    fn new() -> (Self, Arc<Mutex<Vec<CapturedEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }
}

/// Visitor that extracts event fields.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let mut fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.remove("message").unwrap_or_default();
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message,
            fields,
        });
    }
}

fn run_with_capture(f: impl FnOnce()) -> Vec<CapturedEvent> {
    let (layer, events) = EventCapture::new();
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    events.lock().unwrap().clone()
}

fn app() -> StorefrontApp {
    StorefrontApp::new(default_catalog().expect("catalog"))
}

#[test]
fn cart_updates_are_logged_with_totals() {
    let events = run_with_capture(|| {
        let mut sim = ProgramSimulator::new(app());
        sim.init();
        sim.send(Msg::AddToCart);
        sim.send(Msg::AddToCart);
    });

    let updates: Vec<_> = events.iter().filter(|e| e.message == "cart updated").collect();
    assert_eq!(updates.len(), 2);
    assert!(updates.iter().all(|e| e.level == tracing::Level::INFO));
    assert_eq!(updates[0].fields.get("action").map(String::as_str), Some("add"));
    assert_eq!(updates[0].fields.get("change").map(String::as_str), Some("Added"));
    assert_eq!(updates[1].fields.get("total_items").map(String::as_str), Some("2"));
    assert_eq!(
        updates[1].fields.get("total_price").map(String::as_str),
        Some("L 4500.00")
    );
}

#[test]
fn model_crate_logs_line_changes() {
    let events = run_with_capture(|| {
        let mut sim = ProgramSimulator::new(app());
        sim.send(Msg::AddToCart);
        sim.send(Msg::AddToCart);
        sim.send(Msg::UpdateQuantity {
            product_id: storefront_model::ProductId(1),
            quantity: 0,
        });
    });

    let messages: Vec<&str> = events.iter().map(|e| e.message.as_str()).collect();
    assert!(messages.contains(&"cart line added"));
    assert!(messages.contains(&"cart line incremented"));
    let added = events
        .iter()
        .find(|e| e.message == "cart line added")
        .expect("added event");
    assert_eq!(added.level, tracing::Level::DEBUG);
    assert_eq!(added.fields.get("size").map(String::as_str), Some("M"));
    assert_eq!(added.fields.get("color").map(String::as_str), Some("Negro"));
}

#[test]
fn startup_and_navigation_are_logged() {
    let events = run_with_capture(|| {
        let mut sim = ProgramSimulator::new(app());
        sim.init();
        sim.send(Msg::Next);
    });

    let started = events
        .iter()
        .find(|e| e.message == "storefront started")
        .expect("startup event");
    assert_eq!(started.fields.get("products").map(String::as_str), Some("5"));
    assert!(events.iter().any(|e| e.message == "product in view changed"
        && e.fields.get("index").map(String::as_str) == Some("1")));
}

#[test]
fn each_favorite_toggle_is_logged_once() {
    let events = run_with_capture(|| {
        let mut sim = ProgramSimulator::new(app());
        sim.send(Msg::ToggleFavorite(storefront_model::ProductId(1)));
        sim.send(Msg::ToggleFavorite(storefront_model::ProductId(1)));
    });

    let toggles: Vec<_> = events
        .iter()
        .filter(|e| e.message == "favorite toggled")
        .collect();
    assert_eq!(toggles.len(), 2);
    assert_eq!(
        toggles[0].fields.get("now_favorite").map(String::as_str),
        Some("true")
    );
    assert_eq!(
        toggles[1].fields.get("now_favorite").map(String::as_str),
        Some("false")
    );
}
