//! Checkout: order pricing, the two-step form, and (mocked) order placement.
//!
//! The flow starts on the shipping step. Continuing requires a complete
//! address; placing the order requires a complete payment method, a signed-in
//! user and a non-empty cart. Placement waits out a simulated round trip, then
//! snapshots the cart into an [`Order`] and empties the cart.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use atelier_core::{OrderNumber, OrderStatus, Price, ProductId, UserId};

use crate::config::CheckoutConfig;
use crate::deferred::Deferred;
use crate::models::{Address, PaymentMethod};
use crate::services::auth::Auth;
use crate::services::cart::{Cart, CartLine};

/// Errors that can occur during checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("sign in to place an order")]
    SignInRequired,

    #[error("your cart is empty")]
    EmptyCart,

    #[error("shipping address is missing {0}")]
    IncompleteAddress(&'static str),

    #[error("payment details are missing {0}")]
    IncompletePayment(&'static str),

    #[error("choose a payment method")]
    NoPaymentMethod,

    #[error("the order has already been placed")]
    AlreadyPlaced,
}

// =============================================================================
// Pricing
// =============================================================================

/// Subtotal, shipping, tax and total for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Price an order with the given subtotal.
    #[must_use]
    pub fn for_subtotal(subtotal: Price, pricing: &CheckoutConfig) -> Self {
        let shipping = if subtotal >= pricing.free_shipping_threshold {
            Price::ZERO
        } else {
            pricing.flat_shipping
        };
        let tax = subtotal.apply_rate(pricing.tax_rate);

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Whether shipping is free.
    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.shipping == Price::ZERO
    }
}

// =============================================================================
// Orders
// =============================================================================

/// A purchased line, frozen at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            size: line.size.clone(),
            quantity: line.quantity,
            unit_price: line.product.price,
            line_total: line.line_total(),
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub number: OrderNumber,
    pub user_id: UserId,
    pub email: String,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub shipping_address: Address,
    pub payment: String,
    pub summary: OrderSummary,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Flow
// =============================================================================

/// Where the shopper is in the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Placed,
}

/// A checkout in progress.
#[derive(Debug, Default)]
pub struct Checkout {
    step: CheckoutStep,
    address: Address,
    payment: Option<PaymentMethod>,
}

impl Checkout {
    /// Start on the shipping step with a blank address.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub const fn payment(&self) -> Option<&PaymentMethod> {
        self.payment.as_ref()
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    pub fn set_payment(&mut self, payment: PaymentMethod) {
        self.payment = Some(payment);
    }

    /// Move from shipping to payment.
    ///
    /// On the payment step this only re-checks the payment details; placing
    /// the order is what finishes checkout.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::IncompleteAddress` or
    /// `CheckoutError::IncompletePayment` naming the first blank field, and
    /// `CheckoutError::AlreadyPlaced` once the order is placed.
    pub fn advance(&mut self) -> Result<CheckoutStep, CheckoutError> {
        match self.step {
            CheckoutStep::Shipping => {
                self.check_address()?;
                self.step = CheckoutStep::Payment;
            }
            CheckoutStep::Payment => {
                self.check_payment()?;
            }
            CheckoutStep::Placed => return Err(CheckoutError::AlreadyPlaced),
        }
        Ok(self.step)
    }

    /// Go back to the shipping step. No-op once the order is placed.
    pub fn back(&mut self) {
        if self.step == CheckoutStep::Payment {
            self.step = CheckoutStep::Shipping;
        }
    }

    /// Place the order for everything in `cart`.
    ///
    /// Waits `pricing.order_delay`, then empties the cart and returns the
    /// order. The address and payment are validated whichever step the form
    /// is on.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::SignInRequired` with nobody signed in,
    /// `CheckoutError::EmptyCart` for an empty cart, and the address or
    /// payment errors of [`Checkout::advance`]. Nothing changes on error.
    #[instrument(skip_all, fields(lines = cart.lines().len()))]
    pub async fn place_order(
        &mut self,
        auth: &Auth,
        cart: &mut Cart,
        pricing: &CheckoutConfig,
    ) -> Result<Order, CheckoutError> {
        if self.step == CheckoutStep::Placed {
            return Err(CheckoutError::AlreadyPlaced);
        }
        let user = auth.user().ok_or(CheckoutError::SignInRequired)?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.check_address()?;
        let payment = self.check_payment()?.describe();

        let lines: Vec<OrderLine> = cart.lines().iter().map(OrderLine::from).collect();
        let summary = OrderSummary::for_subtotal(cart.subtotal(), pricing);
        let user_id = user.id;
        let email = user.email.clone();
        let shipping_address = self.address.clone();

        let order = Deferred::after(pricing.order_delay, move || Order {
            number: OrderNumber::new(rand::random_range(0..OrderNumber::MAX)),
            user_id,
            email,
            lines,
            status: OrderStatus::default(),
            shipping_address,
            payment,
            summary,
            created_at: Utc::now(),
        })
        .await;

        cart.clear();
        self.step = CheckoutStep::Placed;
        info!(
            order_number = %order.number,
            user_id = %order.user_id,
            total = %order.summary.total,
            "order placed"
        );
        Ok(order)
    }

    fn check_address(&self) -> Result<(), CheckoutError> {
        self.address
            .first_missing_field()
            .map_or(Ok(()), |field| Err(CheckoutError::IncompleteAddress(field)))
    }

    fn check_payment(&self) -> Result<&PaymentMethod, CheckoutError> {
        let payment = self.payment.as_ref().ok_or(CheckoutError::NoPaymentMethod)?;
        payment
            .first_missing_field()
            .map_or(Ok(payment), |field| Err(CheckoutError::IncompletePayment(field)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;
    use tokio::time::Instant;

    use super::*;
    use crate::catalog::Catalog;
    use crate::models::CardInfo;
    use crate::storage::Storage;

    fn address() -> Address {
        Address {
            full_name: "Ada Lovelace".to_string(),
            street_address: "12 St James's Square".to_string(),
            city: "London".to_string(),
            state: "LDN".to_string(),
            postal_code: "SW1Y 4JH".to_string(),
            ..Address::default()
        }
    }

    fn card() -> PaymentMethod {
        PaymentMethod::CreditCard(CardInfo {
            number: SecretString::from("4242 4242 4242 4242"),
            name: "Ada Lovelace".to_string(),
            expiry: "12/30".to_string(),
            cvv: SecretString::from("123"),
        })
    }

    fn ready_checkout() -> Checkout {
        let mut checkout = Checkout::new();
        checkout.set_address(address());
        checkout.set_payment(card());
        checkout
    }

    async fn signed_in(storage: &Storage) -> Auth {
        let mut auth = Auth::load(storage.clone(), Duration::ZERO);
        auth.login("ada@example.com", &SecretString::from("pw"))
            .await
            .unwrap();
        auth
    }

    #[test]
    fn test_summary_below_threshold() {
        let summary =
            OrderSummary::for_subtotal(Price::from_cents(9_999), &CheckoutConfig::default());
        assert_eq!(summary.shipping, Price::from_cents(1_000));
        assert_eq!(summary.tax, Price::from_cents(800));
        assert_eq!(summary.total, Price::from_cents(11_799));
        assert!(!summary.ships_free());
    }

    #[test]
    fn test_summary_at_threshold_ships_free() {
        let summary =
            OrderSummary::for_subtotal(Price::from_cents(10_000), &CheckoutConfig::default());
        assert_eq!(summary.shipping, Price::ZERO);
        assert_eq!(summary.tax, Price::from_cents(800));
        assert_eq!(summary.total, Price::from_cents(10_800));
        assert!(summary.ships_free());
    }

    #[test]
    fn test_summary_of_empty_cart() {
        let summary = OrderSummary::for_subtotal(Price::ZERO, &CheckoutConfig::default());
        assert_eq!(summary.shipping, Price::from_cents(1_000));
        assert_eq!(summary.total, Price::from_cents(1_000));
    }

    #[test]
    fn test_advance_requires_address() {
        let mut checkout = Checkout::new();
        assert_eq!(
            checkout.advance(),
            Err(CheckoutError::IncompleteAddress("full name"))
        );
        assert_eq!(checkout.step(), CheckoutStep::Shipping);

        checkout.set_address(address());
        assert_eq!(checkout.advance(), Ok(CheckoutStep::Payment));

        checkout.back();
        assert_eq!(checkout.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_advance_on_payment_checks_card() {
        let mut checkout = Checkout::new();
        checkout.set_address(address());
        checkout.advance().unwrap();

        assert_eq!(checkout.advance(), Err(CheckoutError::NoPaymentMethod));

        checkout.set_payment(PaymentMethod::CreditCard(CardInfo {
            number: SecretString::from("4242"),
            name: String::new(),
            expiry: "12/30".to_string(),
            cvv: SecretString::from("123"),
        }));
        assert_eq!(
            checkout.advance(),
            Err(CheckoutError::IncompletePayment("name on card"))
        );

        checkout.set_payment(PaymentMethod::PayPal);
        assert_eq!(checkout.advance(), Ok(CheckoutStep::Payment));
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_requires_sign_in() {
        let storage = Storage::in_memory();
        let auth = Auth::load(storage.clone(), Duration::ZERO);
        let mut cart = Cart::load(storage);
        let tee = Catalog::builtin().product("1").unwrap().clone();
        cart.add_item(&tee, 1, "M").unwrap();

        let err = ready_checkout()
            .place_order(&auth, &mut cart, &CheckoutConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err, CheckoutError::SignInRequired);
        assert_eq!(cart.total_items(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_requires_items() {
        let storage = Storage::in_memory();
        let auth = signed_in(&storage).await;
        let mut cart = Cart::load(storage);

        let err = ready_checkout()
            .place_order(&auth, &mut cart, &CheckoutConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_snapshots_and_clears_cart() {
        let storage = Storage::in_memory();
        let auth = signed_in(&storage).await;
        let mut cart = Cart::load(storage.clone());
        let catalog = Catalog::builtin();
        cart.add_item(catalog.product("1").unwrap(), 2, "M").unwrap();
        cart.add_item(catalog.product("7").unwrap(), 1, "One Size")
            .unwrap();
        let subtotal = cart.subtotal();

        let pricing = CheckoutConfig::default();
        let mut checkout = ready_checkout();
        let start = Instant::now();
        let order = checkout
            .place_order(&auth, &mut cart, &pricing)
            .await
            .unwrap();

        assert!(start.elapsed() >= pricing.order_delay);
        assert!(order.number.as_u32() < OrderNumber::MAX);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines.first().unwrap().quantity, 2);
        assert_eq!(order.summary, OrderSummary::for_subtotal(subtotal, &pricing));
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.payment, "Card ending 4242");
        assert_eq!(order.user_id, auth.user().unwrap().id);

        assert!(cart.is_empty());
        assert!(Cart::load(storage).is_empty());
        assert_eq!(checkout.step(), CheckoutStep::Placed);
        assert_eq!(checkout.advance(), Err(CheckoutError::AlreadyPlaced));
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_rejects_incomplete_address() {
        let storage = Storage::in_memory();
        let auth = signed_in(&storage).await;
        let mut cart = Cart::load(storage);
        cart.add_item(Catalog::builtin().product("5").unwrap(), 1, "32")
            .unwrap();

        let mut checkout = ready_checkout();
        checkout.set_address(Address {
            city: String::new(),
            ..address()
        });

        let err = checkout
            .place_order(&auth, &mut cart, &CheckoutConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err, CheckoutError::IncompleteAddress("city"));
        assert!(!cart.is_empty());
    }
}
