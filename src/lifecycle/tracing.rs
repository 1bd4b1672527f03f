//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the actor loop tags every
//! event with `entity_type` instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and commits
//! RUST_LOG=debug cargo run    # full request payloads
//! ```
//!
//! A successful order with a rider looks like this at `info`:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO order_placement:create_order: Sending create_order to actor customer=user_1 shop=shop_1
//! INFO Order composed order_id=order_1 lines=2 total=45.00
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Action ok entity_type="Order" id=order_1
//! ```
//!
//! Rejected requests are logged at `warn` with the error, e.g.
//! `WARN on_create failed entity_type="Order" id=order_2 error=product_4 is not sold by shop_1`.

/// Initialise the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
