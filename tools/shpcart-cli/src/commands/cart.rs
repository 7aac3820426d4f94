//! Cart commands.

use anyhow::Result;
use serde_json::json;
use shpcart_commerce::cart::CartOutcome;

use super::{confirm, AddArgs, ClearArgs, RemoveArgs, UpdateArgs};
use crate::context::Context;
use crate::output::shipping_label;

const CART_WIDTHS: [usize; 5] = [4, 28, 10, 5, 0];

/// Run the add command.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let outcome = ctx.cart.add(args.id, args.quantity)?;
    report(ctx, &outcome);
    Ok(())
}

/// Run the update command.
pub fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let outcome = ctx.cart.update_quantity(args.id, args.quantity)?;
    report(ctx, &outcome);
    Ok(())
}

/// Run the remove command.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let outcome = ctx.cart.remove(args.id)?;
    report(ctx, &outcome);
    Ok(())
}

/// Run the clear command.
pub fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    if ctx.cart.count() == 0 {
        if ctx.output.is_json() {
            ctx.output.json(&json!({ "cleared": false, "message": "Cart is already empty." }));
        }
        ctx.output.info("Cart is already empty.");
        return Ok(());
    }

    if !confirm(
        "Are you sure you want to clear the entire cart?",
        args.yes,
        ctx.output.is_json(),
    )? {
        ctx.output.info("Cart left unchanged.");
        return Ok(());
    }

    ctx.cart.clear()?;
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "cleared": true, "message": "Cart cleared." }));
    }
    ctx.output.success("Cart cleared.");
    Ok(())
}

/// Run the cart command.
pub fn show(ctx: &Context) -> Result<()> {
    let pricing = ctx.pricing.summarize(&ctx.cart)?;

    if ctx.output.is_json() {
        ctx.output.json(&pricing);
        return Ok(());
    }

    ctx.output.debug(&format!(
        "cart file: {}",
        ctx.data_dir().join(format!("{}.json", ctx.cart.key())).display()
    ));
    ctx.output.header(&format!("Your cart ({} items)", pricing.item_count));

    if pricing.unresolved_lines > 0 {
        ctx.output.warn(&format!(
            "{} cart line(s) refer to products no longer in the catalog.",
            pricing.unresolved_lines
        ));
    }

    if pricing.line_items.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "QTY", "TOTAL"], &CART_WIDTHS);
    for line in &pricing.line_items {
        let id = line.product_id.to_string();
        let unit = line.unit_price.display();
        let quantity = line.quantity.to_string();
        let total = line.total.display();
        ctx.output.table_row(
            &[&id, &line.product_name, &unit, &quantity, &total],
            &CART_WIDTHS,
        );
    }

    ctx.output.line("");
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    ctx.output.kv("Shipping", &shipping_label(pricing.shipping_total));
    ctx.output.kv("Total", &pricing.grand_total.display());

    if !pricing.is_free_shipping() {
        let threshold = ctx.pricing.policy().free_shipping_threshold;
        ctx.output.info(&format!(
            "Free shipping on orders of {} or more.",
            threshold.display()
        ));
    }

    Ok(())
}

fn report(ctx: &Context, outcome: &CartOutcome) {
    if ctx.output.is_json() {
        ctx.output.json(outcome);
        return;
    }
    ctx.output.success(&outcome.message);
    ctx.output.debug(&format!("cart now holds {} items", ctx.cart.count()));
}
