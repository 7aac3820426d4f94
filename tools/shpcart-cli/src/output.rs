//! Terminal and JSON rendering.
//!
//! Human-readable text goes to stdout and diagnostics go to stderr, both
//! through `console` so styling is dropped when the stream is not a
//! terminal. In JSON mode only documents and errors are written.

use console::{style, StyledObject, Term};
use serde::Serialize;
use shpcart_commerce::catalog::{Product, MAX_RATING};
use shpcart_commerce::money::group_thousands;
use shpcart_commerce::Money;

/// Width assumed when stdout is not a terminal.
const FALLBACK_WIDTH: usize = 100;

/// Kind of status line, deciding its marker and stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Note,
    Done,
    Caution,
    Failed,
}

impl Status {
    fn marker(self) -> StyledObject<&'static str> {
        match self {
            Status::Note => style("ℹ").blue(),
            Status::Done => style("✓").green(),
            Status::Caution => style("⚠").yellow(),
            Status::Failed => style("✗").red(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Status::Caution | Status::Failed)
    }
}

/// Renders command results for the shopper.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    stdout: Term,
    stderr: Term,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    // A closed pipe is not worth failing a command over.
    fn emit(&self, to_stderr: bool, text: &str) {
        let term = if to_stderr { &self.stderr } else { &self.stdout };
        let _ = term.write_line(text);
    }

    fn status(&self, status: Status, msg: &str) {
        if self.json {
            return;
        }
        let text = match status {
            Status::Failed => format!("{} {}", status.marker(), style(msg).red()),
            _ => format!("{} {}", status.marker(), msg),
        };
        self.emit(status.to_stderr(), &text);
    }

    pub fn info(&self, msg: &str) {
        self.status(Status::Note, msg);
    }

    pub fn success(&self, msg: &str) {
        self.status(Status::Done, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.status(Status::Caution, msg);
    }

    /// Report a failed command. JSON mode gets an `{"error": ..}` object.
    pub fn error(&self, msg: &str) {
        if self.json {
            self.emit(true, &serde_json::json!({ "error": msg }).to_string());
        } else {
            self.status(Status::Failed, msg);
        }
    }

    /// Diagnostics shown only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            self.emit(true, &format!("{} {}", style("→").dim(), style(msg).dim()));
        }
    }

    pub fn header(&self, title: &str) {
        if !self.json {
            self.emit(false, &format!("\n{}", style(title).bold().underlined()));
        }
    }

    pub fn line(&self, text: &str) {
        if !self.json {
            self.emit(false, &format!("  {text}"));
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            self.emit(false, &format!("  {}: {value}", style(key).dim()));
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.json {
            self.emit(false, &format!("  {} {item}", style("•").dim()));
        }
    }

    /// Write `value` as a pretty-printed JSON document.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(document) => self.emit(false, &document),
            Err(e) => tracing::error!(error = %e, "failed to encode JSON output"),
        }
    }

    /// One table row, each cell padded to its width. A zero width leaves
    /// the cell unpadded. The row is cut at the terminal edge.
    pub fn table_row(&self, cells: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let row = pad_cells(cells, widths);
        self.emit(false, &console::truncate_str(&row, self.width(), "…"));
    }

    fn width(&self) -> usize {
        self.stdout
            .size_checked()
            .map_or(FALLBACK_WIDTH, |(_, cols)| usize::from(cols))
    }
}

fn pad_cells(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| console::pad_str(cell, width, console::Alignment::Left, None).into_owned())
        .collect();
    format!("  {}", padded.join("  "))
}

/// Shipping as shown to the shopper: "FREE" when waived.
pub fn shipping_label(shipping: Money) -> String {
    if shipping.is_zero() {
        style("FREE").green().to_string()
    } else {
        shipping.display()
    }
}

/// Merchandising badge, styled for listings.
pub fn badge(label: Option<&str>) -> String {
    match label {
        Some(label) => style(format!("[{label}]")).yellow().to_string(),
        None => String::new(),
    }
}

/// Five-slot star bar: whole stars, a half star from .5 up, then blanks.
pub fn rating_stars(rating: f32) -> String {
    let slots = MAX_RATING as usize;
    let rating = rating.clamp(0.0, MAX_RATING);
    let full = (rating.floor() as usize).min(slots);
    let half = usize::from(full < slots && rating.fract() >= 0.5);
    format!(
        "{}{}{}",
        "★".repeat(full),
        "½".repeat(half),
        "☆".repeat(slots - full - half)
    )
}

/// Compact rating cell for listings, e.g. `★ 4.8 (1,240)`.
pub fn rating_cell(product: &Product) -> String {
    match (product.rating, product.reviews) {
        (Some(rating), Some(reviews)) => {
            format!("★ {rating:.1} ({})", group_thousands(&reviews.to_string()))
        }
        (Some(rating), None) => format!("★ {rating:.1}"),
        (None, _) => String::new(),
    }
}

/// Full rating line for the product page, or `None` for unrated products.
pub fn rating_line(product: &Product) -> Option<String> {
    let rating = product.rating?;
    let stars = style(rating_stars(rating)).yellow();
    Some(match product.reviews {
        Some(1) => format!("{stars} {rating:.1} (1 review)"),
        Some(reviews) => format!(
            "{stars} {rating:.1} ({} reviews)",
            group_thousands(&reviews.to_string())
        ),
        None => format!("{stars} {rating:.1}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shpcart_commerce::{Currency, ProductId};

    fn rated(rating: Option<f32>, reviews: Option<u32>) -> Product {
        let mut product = Product::new(
            ProductId::new(1),
            "Headphones",
            "Over-ear",
            Money::new(8999, Currency::USD),
            "Audio",
        );
        product.rating = rating;
        product.reviews = reviews;
        product
    }

    #[test]
    fn test_shipping_label() {
        console::set_colors_enabled(false);
        assert_eq!(shipping_label(Money::zero(Currency::USD)), "FREE");
        assert_eq!(shipping_label(Money::new(999, Currency::USD)), "$9.99");
    }

    #[test]
    fn test_badge() {
        console::set_colors_enabled(false);
        assert_eq!(badge(Some("New")), "[New]");
        assert_eq!(badge(None), "");
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(4.8), "★★★★½");
        assert_eq!(rating_stars(4.3), "★★★★☆");
        assert_eq!(rating_stars(4.5), "★★★★½");
        assert_eq!(rating_stars(5.0), "★★★★★");
        assert_eq!(rating_stars(0.0), "☆☆☆☆☆");
        assert_eq!(rating_stars(9.0), "★★★★★");
    }

    #[test]
    fn test_rating_cell_and_line() {
        console::set_colors_enabled(false);
        let product = rated(Some(4.8), Some(1240));
        assert_eq!(rating_cell(&product), "★ 4.8 (1,240)");
        assert_eq!(rating_line(&product).unwrap(), "★★★★½ 4.8 (1,240 reviews)");

        assert_eq!(rating_line(&rated(Some(4.0), Some(1))).unwrap(), "★★★★☆ 4.0 (1 review)");
        assert_eq!(rating_cell(&rated(Some(4.0), None)), "★ 4.0");
        assert_eq!(rating_cell(&rated(None, Some(12))), "");
        assert!(rating_line(&rated(None, None)).is_none());
    }

    #[test]
    fn test_pad_cells() {
        assert_eq!(pad_cells(&["1", "Mug", "tail"], &[3, 5, 0]), "  1    Mug    tail");
    }
}
