//! Checkout command.

use anyhow::Result;
use shpcart_commerce::checkout::{confirm_order, OrderSummary, ORDER_PLACED_MESSAGE};
use shpcart_commerce::CommerceError;

use super::{confirm, CheckoutArgs};
use crate::context::Context;
use crate::output::shipping_label;

const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Add some products first!";

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let summary = match OrderSummary::build(&ctx.cart, &ctx.pricing) {
        Ok(summary) => summary,
        Err(e) => return Err(explain(e)),
    };

    print_summary(ctx, &summary);

    if !confirm("Place this order?", args.yes, ctx.output.is_json())? {
        ctx.output.info("Order not placed. Your cart is unchanged.");
        return Ok(());
    }

    let confirmation = match confirm_order(&ctx.cart, &ctx.pricing) {
        Ok(confirmation) => confirmation,
        Err(e) => return Err(explain(e)),
    };

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.success(ORDER_PLACED_MESSAGE);
    ctx.output.kv("Order number", confirmation.order_number.as_str());
    ctx.output.kv(
        "Placed at",
        &confirmation.placed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    Ok(())
}

fn explain(e: CommerceError) -> anyhow::Error {
    match e {
        CommerceError::EmptyCart => anyhow::Error::new(e).context(EMPTY_CART_MESSAGE),
        e => e.into(),
    }
}

fn print_summary(ctx: &Context, summary: &OrderSummary) {
    ctx.output.header("Order summary");
    for item in &summary.items {
        ctx.output.kv(
            &format!("{} × {}", item.product.name, item.quantity),
            &item.line_total.display(),
        );
    }
    ctx.output.line("");
    ctx.output.kv("Subtotal", &summary.subtotal.display());
    ctx.output.kv("Shipping", &shipping_label(summary.shipping_total));
    ctx.output.kv("Total", &summary.grand_total.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_message() {
        let err = explain(CommerceError::EmptyCart);
        assert_eq!(err.to_string(), EMPTY_CART_MESSAGE);
        assert!(matches!(
            err.downcast_ref::<CommerceError>(),
            Some(CommerceError::EmptyCart)
        ));
        assert_eq!(explain(CommerceError::Overflow).to_string(), "Arithmetic overflow in cart calculation");
    }
}
