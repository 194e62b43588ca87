//! lopdf-backed page decoding.
//!
//! Walks each page's content stream tracking the text matrix, the active
//! font, and the nonstroking fill color, emitting one [`Span`] per text
//! show operation. Spans are then grouped into baseline lines and flipped
//! into top-down page coordinates so ascending vertical order is reading
//! order.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use lopdf::{Document as LopdfDocument, Object, ObjectId};

use crate::detect;
use crate::error::{Error, Result};

use super::span::{PageText, RawLine, Span, FLAG_BOLD, FLAG_ITALIC};
use super::PageSource;

/// Default page size when no MediaBox is present (Letter, in points).
const DEFAULT_PAGE_SIZE: (f32, f32) = (612.0, 792.0);

/// Kerning adjustment (in 1/1000 text-space units) treated as a word gap
/// inside a TJ array.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Page decoder backed by `lopdf::Document`.
pub struct LopdfSource {
    doc: LopdfDocument,
}

impl LopdfSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        detect::require_pdf(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Self::from_document(doc)
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect::sniff_version(data)?;

        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Self::from_document(doc)
    }

    /// Load a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn from_document(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Page dimensions from the MediaBox, defaulting to Letter.
    fn page_dimensions(&self, page_id: ObjectId) -> (f32, f32) {
        if let Ok(page_dict) = self.doc.get_dictionary(page_id) {
            if let Ok(media_box) = page_dict.get(b"MediaBox") {
                if let Ok(array) = media_box.as_array() {
                    if array.len() >= 4 {
                        let width = array[2].as_float().unwrap_or(DEFAULT_PAGE_SIZE.0);
                        let height = array[3].as_float().unwrap_or(DEFAULT_PAGE_SIZE.1);
                        return (width, height);
                    }
                }
            }
        }
        DEFAULT_PAGE_SIZE
    }

    /// Raw decompressed content stream bytes for a page.
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = page_dict
            .get(b"Contents")
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    return s
                        .decompressed_content()
                        .map_err(|e| Error::PdfParse(e.to_string()));
                }
                Err(Error::PdfParse("Invalid content stream".to_string()))
            }
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            if let Ok(data) = s.decompressed_content() {
                                content.extend_from_slice(&data);
                                content.push(b' ');
                            }
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    /// Decode a string operand through the current font's encoding, with a
    /// byte-level fallback when the encoding is unavailable.
    fn decode_string(&self, font: Option<&&lopdf::Dictionary>, bytes: &[u8]) -> String {
        if let Some(font_dict) = font {
            if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                    return text;
                }
            }
        }
        decode_bytes_fallback(bytes)
    }

    /// Interpret one page's content stream into placed spans (bottom-up y).
    fn interpret_page(
        &self,
        data: &[u8],
        fonts: &BTreeMap<Vec<u8>, &lopdf::Dictionary>,
    ) -> Result<Vec<PlacedSpan>> {
        let content = lopdf::content::Content::decode(data)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut spans: Vec<PlacedSpan> = Vec::new();
        let mut matrix = TextMatrix::default();
        let mut in_text = false;
        let mut font_name: Vec<u8> = Vec::new();
        let mut font_size: f32 = 12.0;
        let mut font_flags: u32 = 0;
        let mut fill = FillColor::default();

        for op in content.operations {
            match op.operator.as_str() {
                "BT" => {
                    in_text = true;
                    matrix = TextMatrix::default();
                }
                "ET" => in_text = false,
                "Tf" => {
                    if op.operands.len() >= 2 {
                        if let Object::Name(name) = &op.operands[0] {
                            font_name = name.clone();
                            font_flags = fonts
                                .get(name.as_slice())
                                .map(|dict| style_flags(&base_font_name(dict)))
                                .unwrap_or(0);
                        }
                        font_size = number(&op.operands[1]).unwrap_or(12.0);
                    }
                }
                "TL" => {
                    if let Some(leading) = op.operands.first().and_then(number) {
                        matrix.leading = leading;
                    }
                }
                "Td" => {
                    if op.operands.len() >= 2 {
                        let tx = number(&op.operands[0]).unwrap_or(0.0);
                        let ty = number(&op.operands[1]).unwrap_or(0.0);
                        matrix.translate(tx, ty);
                    }
                }
                "TD" => {
                    if op.operands.len() >= 2 {
                        let tx = number(&op.operands[0]).unwrap_or(0.0);
                        let ty = number(&op.operands[1]).unwrap_or(0.0);
                        matrix.leading = -ty;
                        matrix.translate(tx, ty);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        matrix.set(
                            number(&op.operands[0]).unwrap_or(1.0),
                            number(&op.operands[1]).unwrap_or(0.0),
                            number(&op.operands[2]).unwrap_or(0.0),
                            number(&op.operands[3]).unwrap_or(1.0),
                            number(&op.operands[4]).unwrap_or(0.0),
                            number(&op.operands[5]).unwrap_or(0.0),
                        );
                    }
                }
                "T*" => matrix.next_line(),
                "Tj" | "TJ" => {
                    if !in_text {
                        continue;
                    }
                    let font = fonts.get(&font_name);
                    let text = if op.operator == "TJ" {
                        self.collect_tj_text(op.operands.first(), font)
                    } else if let Some(Object::String(bytes, _)) = op.operands.first() {
                        self.decode_string(font, bytes)
                    } else {
                        String::new()
                    };
                    push_span(&mut spans, text, &matrix, font_size, font_flags, fill.rgb);
                }
                "'" | "\"" => {
                    matrix.next_line();
                    if !in_text {
                        continue;
                    }
                    let text_idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                        let text = self.decode_string(fonts.get(&font_name), bytes);
                        push_span(&mut spans, text, &matrix, font_size, font_flags, fill.rgb);
                    }
                }
                "rg" => fill.set_rgb(&op.operands),
                "g" => fill.set_gray(&op.operands),
                "k" => fill.set_cmyk(&op.operands),
                "sc" | "scn" => fill.set_components(&op.operands),
                "q" => fill.save(),
                "Q" => fill.restore(),
                _ => {}
            }
        }

        Ok(spans)
    }

    /// Decode a TJ array: strings interleaved with kerning adjustments.
    /// Large negative adjustments act as word gaps.
    fn collect_tj_text(
        &self,
        operand: Option<&Object>,
        font: Option<&&lopdf::Dictionary>,
    ) -> String {
        let Some(Object::Array(items)) = operand else {
            return String::new();
        };

        let mut combined = String::new();
        for item in items {
            match item {
                Object::String(bytes, _) => combined.push_str(&self.decode_string(font, bytes)),
                Object::Integer(n) => {
                    if -(*n as f32) > TJ_SPACE_THRESHOLD && !combined.ends_with(' ') {
                        combined.push(' ');
                    }
                }
                Object::Real(n) => {
                    if -n > TJ_SPACE_THRESHOLD && !combined.ends_with(' ') {
                        combined.push(' ');
                    }
                }
                _ => {}
            }
        }
        combined
    }
}

impl PageSource for LopdfSource {
    fn pages(&self) -> Result<Vec<PageText>> {
        let mut pages = Vec::new();

        for (number, page_id) in self.doc.get_pages() {
            let (width, height) = self.page_dimensions(page_id);
            let fonts = self.doc.get_page_fonts(page_id).unwrap_or_default();

            // A page with no Contents entry is a valid empty page.
            let spans = match self.page_content(page_id) {
                Ok(data) => self.interpret_page(&data, &fonts)?,
                Err(e) => {
                    log::debug!("page {}: no text content ({})", number, e);
                    Vec::new()
                }
            };

            let lines = group_into_lines(spans, height);
            log::debug!("page {}: {} lines", number, lines.len());
            pages.push(PageText {
                number,
                width,
                height,
                lines,
            });
        }

        Ok(pages)
    }
}

/// A span plus its baseline position in bottom-up page space.
struct PlacedSpan {
    span: Span,
    baseline: f32,
    size: f32,
}

fn push_span(
    spans: &mut Vec<PlacedSpan>,
    text: String,
    matrix: &TextMatrix,
    font_size: f32,
    flags: u32,
    color: u32,
) {
    if text.trim().is_empty() {
        return;
    }
    let (x, y) = matrix.position();
    let size = font_size * matrix.scale();
    spans.push(PlacedSpan {
        span: Span::new(text, size, flags, color, x),
        baseline: y,
        size,
    });
}

/// Group placed spans into baseline lines and flip into top-down space.
///
/// Spans whose baselines differ by less than 30% of the font size are
/// treated as one line. Lines come out in reading order (top to bottom),
/// spans within a line left to right.
fn group_into_lines(mut spans: Vec<PlacedSpan>, page_height: f32) -> Vec<RawLine> {
    if spans.is_empty() {
        return Vec::new();
    }

    spans.sort_by(|a, b| {
        b.baseline
            .partial_cmp(&a.baseline)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                a.span
                    .x
                    .partial_cmp(&b.span.x)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });

    let mut lines: Vec<RawLine> = Vec::new();
    let mut current: Vec<PlacedSpan> = Vec::new();

    for placed in spans {
        let starts_new_line = match current.first() {
            Some(first) => (placed.baseline - first.baseline).abs() > placed.size * 0.3,
            None => false,
        };
        if starts_new_line {
            lines.push(finish_line(std::mem::take(&mut current), page_height));
        }
        current.push(placed);
    }
    if !current.is_empty() {
        lines.push(finish_line(current, page_height));
    }

    lines
}

fn finish_line(mut placed: Vec<PlacedSpan>, page_height: f32) -> RawLine {
    placed.sort_by(|a, b| {
        a.span
            .x
            .partial_cmp(&b.span.x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let baseline = placed[0].baseline;
    RawLine {
        spans: placed.into_iter().map(|p| p.span).collect(),
        y: page_height - baseline,
    }
}

/// Nonstroking fill color, packed as 0xRRGGBB, with a q/Q save stack.
#[derive(Default)]
struct FillColor {
    rgb: u32,
    stack: Vec<u32>,
}

impl FillColor {
    fn set_rgb(&mut self, operands: &[Object]) {
        if operands.len() >= 3 {
            let r = number(&operands[0]).unwrap_or(0.0);
            let g = number(&operands[1]).unwrap_or(0.0);
            let b = number(&operands[2]).unwrap_or(0.0);
            self.rgb = pack_rgb(r, g, b);
        }
    }

    fn set_gray(&mut self, operands: &[Object]) {
        if let Some(v) = operands.first().and_then(number) {
            self.rgb = pack_rgb(v, v, v);
        }
    }

    fn set_cmyk(&mut self, operands: &[Object]) {
        if operands.len() >= 4 {
            let c = number(&operands[0]).unwrap_or(0.0);
            let m = number(&operands[1]).unwrap_or(0.0);
            let y = number(&operands[2]).unwrap_or(0.0);
            let k = number(&operands[3]).unwrap_or(0.0);
            self.rgb = pack_rgb((1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k));
        }
    }

    /// sc/scn set color in the current color space; infer it from arity.
    fn set_components(&mut self, operands: &[Object]) {
        let values: Vec<f32> = operands.iter().filter_map(number).collect();
        match values.len() {
            1 => self.rgb = pack_rgb(values[0], values[0], values[0]),
            3 => self.rgb = pack_rgb(values[0], values[1], values[2]),
            4 => {
                let (c, m, y, k) = (values[0], values[1], values[2], values[3]);
                self.rgb =
                    pack_rgb((1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k));
            }
            _ => {}
        }
    }

    fn save(&mut self) {
        self.stack.push(self.rgb);
    }

    fn restore(&mut self) {
        if let Some(rgb) = self.stack.pop() {
            self.rgb = rgb;
        }
    }
}

fn pack_rgb(r: f32, g: f32, b: f32) -> u32 {
    let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
    (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

/// Text matrix tracking position in the content stream.
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
    leading: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
            leading: 12.0,
        }
    }
}

impl TextMatrix {
    #[allow(clippy::many_single_char_names)]
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        self.translate(0.0, -self.leading);
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

/// Base font name from a font dictionary (e.g. "Helvetica-Bold").
fn base_font_name(dict: &lopdf::Dictionary) -> String {
    dict.get(b"BaseFont")
        .ok()
        .and_then(|o| o.as_name().ok())
        .map(|n| String::from_utf8_lossy(n).to_string())
        .unwrap_or_default()
}

/// Derive style flag bits from a base font name.
fn style_flags(base_font: &str) -> u32 {
    let name = base_font.to_lowercase();
    let mut flags = 0;
    if name.contains("bold") || name.contains("black") || name.contains("heavy") {
        flags |= FLAG_BOLD;
    }
    if name.contains("italic") || name.contains("oblique") {
        flags |= FLAG_ITALIC;
    }
    flags
}

/// Extract a number from a content-stream operand.
fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Byte-level text decoding when no font encoding is available:
/// UTF-16BE with BOM, then UTF-8, then Latin-1.
fn decode_bytes_fallback(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter(|c| c.len() == 2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
