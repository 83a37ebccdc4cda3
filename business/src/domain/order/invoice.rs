//! Fixed invoice layout, drawn through a minimal canvas so the document
//! backend stays swappable.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner.

use crate::domain::shared::value_objects::format_money;

use super::model::{Order, OrderItem};

pub const TITLE: &str = "Invoice";
pub const TITLE_Y: f32 = 750.0;
pub const HEADER_Y: f32 = 700.0;
pub const FIRST_ROW_Y: f32 = 650.0;
pub const ROW_HEIGHT: f32 = 50.0;
/// Rows are never drawn below this line; the next page starts instead.
pub const BOTTOM_MARGIN: f32 = 50.0;
/// Continuation pages start with the column header here.
pub const PAGE_TOP_Y: f32 = 750.0;

pub const NAME_X: f32 = 100.0;
pub const QUANTITY_X: f32 = 250.0;
pub const PRICE_X: f32 = 400.0;

/// Drawing surface for invoices.
pub trait InvoiceCanvas {
    fn draw_string(&mut self, x: f32, y: f32, text: &str);
    /// Ends the current page; drawing afterwards goes to a new page.
    fn show_page(&mut self);
}

/// Lays out the order: title, column header, one row per item, then the
/// total after a blank row.
/// Always ends with `show_page`.
pub fn draw_invoice(order: &Order, canvas: &mut dyn InvoiceCanvas) {
    canvas.draw_string(NAME_X, TITLE_Y, TITLE);
    draw_header(canvas, HEADER_Y);

    let mut y = FIRST_ROW_Y;
    for item in &order.items {
        if y < BOTTOM_MARGIN {
            canvas.show_page();
            draw_header(canvas, PAGE_TOP_Y);
            y = PAGE_TOP_Y - ROW_HEIGHT;
        }
        draw_item(canvas, item, y);
        y -= ROW_HEIGHT;
    }

    // Total goes two rows below the last item.
    let mut total_y = y - ROW_HEIGHT;
    if total_y < BOTTOM_MARGIN {
        canvas.show_page();
        total_y = PAGE_TOP_Y;
    }
    canvas.draw_string(
        PRICE_X,
        total_y,
        &format!("Total: {}", format_money(&order.total_amount)),
    );
    canvas.show_page();
}

fn draw_header(canvas: &mut dyn InvoiceCanvas, y: f32) {
    canvas.draw_string(NAME_X, y, "Product name");
    canvas.draw_string(QUANTITY_X, y, "Quantity");
    canvas.draw_string(PRICE_X, y, "Price");
}

fn draw_item(canvas: &mut dyn InvoiceCanvas, item: &OrderItem, y: f32) {
    canvas.draw_string(NAME_X, y, &item.product_name);
    canvas.draw_string(QUANTITY_X, y, &item.quantity.to_string());
    canvas.draw_string(PRICE_X, y, &format_money(&item.unit_price));
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::shared::value_objects::UserId;

    #[derive(Default)]
    struct RecordingCanvas {
        pages: Vec<Vec<(f32, f32, String)>>,
        current: Vec<(f32, f32, String)>,
    }

    impl RecordingCanvas {
        /// Distinct baselines per page, in drawing order.
        fn rows(page: &[(f32, f32, String)]) -> Vec<f32> {
            let mut rows: Vec<f32> = Vec::new();
            for (_, y, _) in page {
                if !rows.contains(y) {
                    rows.push(*y);
                }
            }
            rows
        }

        fn texts(&self) -> Vec<&str> {
            self.pages
                .iter()
                .flatten()
                .map(|(_, _, text)| text.as_str())
                .collect()
        }
    }

    impl InvoiceCanvas for RecordingCanvas {
        fn draw_string(&mut self, x: f32, y: f32, text: &str) {
            self.current.push((x, y, text.to_string()));
        }
        fn show_page(&mut self) {
            self.pages.push(std::mem::take(&mut self.current));
        }
    }

    fn order_with(items: usize) -> Order {
        Order {
            id: Uuid::new_v4(),
            user_id: UserId::new("test-user-id"),
            total_amount: BigDecimal::from_str("42.5").unwrap(),
            items: (0..items)
                .map(|i| OrderItem {
                    product_name: format!("Product {}", i + 1),
                    quantity: 2,
                    unit_price: BigDecimal::from(3),
                })
                .collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_draw_item_rows_plus_title_header_and_total() {
        let mut canvas = RecordingCanvas::default();

        draw_invoice(&order_with(3), &mut canvas);

        assert_eq!(canvas.pages.len(), 1);
        assert_eq!(RecordingCanvas::rows(&canvas.pages[0]).len(), 3 + 3);
        assert_eq!(canvas.pages[0].len(), 1 + 3 + 3 * 3 + 1);
    }

    #[test]
    fn should_render_empty_order_with_three_rows() {
        let mut canvas = RecordingCanvas::default();

        draw_invoice(&order_with(0), &mut canvas);

        assert_eq!(RecordingCanvas::rows(&canvas.pages[0]).len(), 3);
        assert!(canvas.texts().contains(&"Total: 42.50"));
    }

    #[test]
    fn should_advance_cursor_by_row_height() {
        let mut canvas = RecordingCanvas::default();

        draw_invoice(&order_with(2), &mut canvas);

        let rows = RecordingCanvas::rows(&canvas.pages[0]);
        assert_eq!(rows, vec![TITLE_Y, HEADER_Y, 650.0, 600.0, 500.0]);
    }

    #[test]
    fn should_leave_blank_row_between_last_item_and_total() {
        let mut canvas = RecordingCanvas::default();

        draw_invoice(&order_with(1), &mut canvas);

        let total = canvas
            .pages
            .iter()
            .flatten()
            .find(|(_, _, text)| text.starts_with("Total: "))
            .unwrap();
        assert_eq!((total.0, total.1), (PRICE_X, FIRST_ROW_Y - 2.0 * ROW_HEIGHT));
    }

    #[test]
    fn should_print_item_name_quantity_and_price() {
        let mut canvas = RecordingCanvas::default();

        draw_invoice(&order_with(1), &mut canvas);

        let texts = canvas.texts();
        assert!(texts.contains(&"Product 1"));
        assert!(texts.contains(&"2"));
        assert!(texts.contains(&"3.00"));
    }

    #[test]
    fn should_fit_eleven_items_on_one_page() {
        let mut canvas = RecordingCanvas::default();

        draw_invoice(&order_with(11), &mut canvas);

        assert_eq!(canvas.pages.len(), 1);
        assert_eq!(RecordingCanvas::rows(&canvas.pages[0]).len(), 11 + 3);
    }

    #[test]
    fn should_break_page_and_repeat_header_when_rows_overflow() {
        let mut canvas = RecordingCanvas::default();

        draw_invoice(&order_with(20), &mut canvas);

        assert_eq!(canvas.pages.len(), 2);
        assert!(
            canvas
                .pages
                .iter()
                .flatten()
                .all(|(_, y, _)| *y >= BOTTOM_MARGIN)
        );
        let second = &canvas.pages[1];
        assert_eq!(second[0], (NAME_X, PAGE_TOP_Y, "Product name".to_string()));
        let item_rows = canvas
            .texts()
            .iter()
            .filter(|t| t.starts_with("Product ") && **t != "Product name")
            .count();
        assert_eq!(item_rows, 20);
    }

    #[test]
    fn should_move_total_to_next_page_when_no_room_below_last_row() {
        let mut canvas = RecordingCanvas::default();

        draw_invoice(&order_with(12), &mut canvas);

        assert_eq!(canvas.pages.len(), 2);
        assert_eq!(
            canvas.pages[1],
            vec![(PRICE_X, PAGE_TOP_Y, "Total: 42.50".to_string())]
        );
    }
}
