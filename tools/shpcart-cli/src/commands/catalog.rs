//! Catalog browsing commands.

use anyhow::Result;
use serde::Serialize;
use shpcart_commerce::catalog::{CategoryFilter, Product};
use shpcart_commerce::search::SearchQuery;
use shpcart_commerce::CommerceError;

use super::{ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::{badge, rating_cell, rating_line};

const LISTING_WIDTHS: [usize; 6] = [4, 28, 12, 10, 15, 0];

/// Run the products command.
pub fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut query = SearchQuery::new();
    if let Some(category) = args.category.as_deref() {
        query = query.with_category(CategoryFilter::parse(category));
    }
    if let Some(text) = args.search {
        query = query.with_text(text);
    }

    let products = ctx.catalog().search(&query);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", query.category));
    if products.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    print_listing(ctx, &products);
    Ok(())
}

/// Run the product command.
pub fn product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let product = catalog
        .get(args.id)
        .ok_or(CommerceError::ProductNotFound(args.id))?;
    let related = catalog.related(args.id, args.related);

    if ctx.output.is_json() {
        #[derive(Serialize)]
        struct ProductView<'a> {
            product: &'a Product,
            related: &'a [&'a Product],
        }
        ctx.output.json(&ProductView {
            product,
            related: &related,
        });
        return Ok(());
    }

    let title = format!("{} {}", product.name, badge(product.badge.as_deref()));
    ctx.output.header(title.trim_end());
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("category", &product.category);
    if let Some(rating) = rating_line(product) {
        ctx.output.kv("rating", &rating);
    }
    ctx.output.line("");
    ctx.output
        .line(product.long_description.as_deref().unwrap_or(&product.description));

    if !product.specs.is_empty() {
        ctx.output.header("Specifications");
        for spec in &product.specs {
            ctx.output.kv(&spec.label, &spec.value);
        }
    }

    if !related.is_empty() {
        ctx.output.header("You may also like");
        print_listing(ctx, &related);
    }

    Ok(())
}

/// Run the categories command.
pub fn categories(ctx: &Context) -> Result<()> {
    let categories = ctx.catalog().categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        let count = ctx.catalog().by_category(category).len();
        ctx.output.list_item(&format!("{category} ({count})"));
    }
    Ok(())
}

fn print_listing(ctx: &Context, products: &[&Product]) {
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "RATING", "DESCRIPTION"], &LISTING_WIDTHS);
    for product in products {
        let id = product.id.to_string();
        let price = product.price.display();
        let rating = rating_cell(product);
        let description = match product.badge.as_deref() {
            Some(label) => format!("{} {}", badge(Some(label)), product.description),
            None => product.description.clone(),
        };
        ctx.output.table_row(
            &[&id, &product.name, &product.category, &price, &rating, &description],
            &LISTING_WIDTHS,
        );
    }
}
