//! Checkout command.

use clap::Args;
use secrecy::SecretString;

use atelier_storefront::Storefront;
use atelier_storefront::models::{Address, CardInfo, PaymentMethod};

use super::CommandError;

/// Shipping and payment details for `atelier checkout`.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub full_name: String,

    #[arg(long)]
    pub street: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub state: String,

    #[arg(long)]
    pub postal_code: String,

    /// Defaults to United States
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Pay with PayPal instead of a card
    #[arg(long, conflicts_with_all = ["card_number", "card_name", "expiry", "cvv"])]
    pub paypal: bool,

    #[arg(long, required_unless_present = "paypal")]
    pub card_number: Option<String>,

    #[arg(long, required_unless_present = "paypal")]
    pub card_name: Option<String>,

    /// MM/YY
    #[arg(long, required_unless_present = "paypal")]
    pub expiry: Option<String>,

    #[arg(long, required_unless_present = "paypal")]
    pub cvv: Option<String>,
}

impl CheckoutArgs {
    fn address(&self) -> Address {
        let defaults = Address::default();
        Address {
            full_name: self.full_name.clone(),
            street_address: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone().unwrap_or(defaults.country),
            phone: self.phone.clone(),
        }
    }

    fn payment(self) -> PaymentMethod {
        if self.paypal {
            return PaymentMethod::PayPal;
        }
        PaymentMethod::CreditCard(CardInfo {
            number: SecretString::from(self.card_number.unwrap_or_default()),
            name: self.card_name.unwrap_or_default(),
            expiry: self.expiry.unwrap_or_default(),
            cvv: SecretString::from(self.cvv.unwrap_or_default()),
        })
    }
}

/// Place an order for everything in the cart.
///
/// # Errors
///
/// Returns `AppError::Checkout` if nobody is signed in, the cart is empty, or
/// the form is incomplete.
#[allow(clippy::print_stdout)]
pub async fn place_order(storefront: &mut Storefront, args: CheckoutArgs) -> Result<(), CommandError> {
    let address = args.address();
    let order = storefront.checkout(address, args.payment()).await?;

    println!("Order #{} placed", order.number);
    for line in &order.lines {
        println!(
            "  {} / {} x{} - {}",
            line.name, line.size, line.quantity, line.line_total
        );
    }
    println!("  Subtotal: {}", order.summary.subtotal);
    println!("  Shipping: {}", order.summary.shipping);
    println!("  Tax:      {}", order.summary.tax);
    println!("  Total:    {}", order.summary.total);
    println!("Paid with {}", order.payment);
    println!(
        "Shipping to {}, {}, {}",
        order.shipping_address.full_name, order.shipping_address.city, order.shipping_address.country
    );
    Ok(())
}
