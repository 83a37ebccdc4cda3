use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use business::domain::order::invoice::InvoiceCanvas;

/// A4 in points.
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const FONT_SIZE: f32 = 12.0;
const FONT_NAME: Name<'static> = Name(b"F1");

#[derive(Debug, Clone)]
struct TextRun {
    x: f32,
    y: f32,
    text: Vec<u8>,
}

/// Collects text runs page by page and serializes them into a PDF on
/// `finish`. Uses the built-in Helvetica, so characters outside printable
/// ASCII are replaced with `?`.
#[derive(Debug, Default)]
pub struct PdfCanvas {
    pages: Vec<Vec<TextRun>>,
    current: Vec<TextRun>,
}

impl PdfCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(mut self) -> Vec<u8> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
        }

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_id = Ref::new(3);
        let page_ids: Vec<(Ref, Ref)> = (0..self.pages.len())
            .map(|i| {
                let base = 4 + 2 * i32::try_from(i).unwrap_or(i32::MAX / 2 - 4);
                (Ref::new(base), Ref::new(base + 1))
            })
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(i32::try_from(page_ids.len()).unwrap_or(i32::MAX));
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        for (runs, (page_id, content_id)) in self.pages.iter().zip(&page_ids) {
            {
                let mut page = pdf.page(*page_id);
                page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
                page.parent(page_tree_id);
                page.contents(*content_id);
                page.resources().fonts().pair(FONT_NAME, font_id);
            }

            let mut content = Content::new();
            for run in runs {
                content.begin_text();
                content.set_font(FONT_NAME, FONT_SIZE);
                content.next_line(run.x, run.y);
                content.show(Str(&run.text));
                content.end_text();
            }
            pdf.stream(*content_id, &content.finish());
        }

        pdf.finish()
    }
}

fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() {
                c as u8
            } else {
                b'?'
            }
        })
        .collect()
}

impl InvoiceCanvas for PdfCanvas {
    fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        self.current.push(TextRun {
            x,
            y,
            text: encode_text(text),
        });
    }

    fn show_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
    }
}
