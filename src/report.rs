//! Downloadable report generation.
//!
//! Renders a profile and its result bundle into a paginated A4 PDF via
//! `printpdf`. Long paragraphs are word-wrapped to a fixed content width
//! and flow onto a new page whenever the vertical cursor drops below a
//! fixed threshold. A custom font from the config is embedded when
//! available; otherwise the builtin Helvetica family is used and a warning
//! is logged, so report generation never blocks the analysis flow.

use crate::config::ReportConfig;
use crate::types::{Profile, ResultBundle};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use std::fs::File;
use std::io::BufWriter;

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN: Mm = Mm(20.0);
/// First baseline on a fresh page
const CONTENT_TOP: Mm = Mm(277.0);
/// Below this the next line starts on a new page
const CONTENT_FLOOR: Mm = Mm(25.0);
/// Content width for word-wrapping, in characters at body size
const WRAP_WIDTH: usize = 90;

/// Vertical cursor tracking the flow of lines down a page
///
/// Pure bookkeeping, independent of the PDF backend: callers ask for the
/// next baseline and the cursor reports when a page break is due.
#[derive(Clone, Debug)]
pub struct PageCursor {
    y: Mm,
    top: Mm,
    floor: Mm,
    pages: usize,
}

impl PageCursor {
    pub fn new(top: Mm, floor: Mm) -> Self {
        Self {
            y: top,
            top,
            floor,
            pages: 1,
        }
    }

    /// Reset to a fresh page if the cursor has dropped below the floor
    ///
    /// Returns true when the caller must open a new page before drawing.
    pub fn check_overflow(&mut self) -> bool {
        if self.y.0 < self.floor.0 {
            self.y = self.top;
            self.pages += 1;
            true
        } else {
            false
        }
    }

    /// Baseline for the next line
    pub fn y(&self) -> Mm {
        self.y
    }

    /// Move the cursor down by one line step
    pub fn advance(&mut self, step: Mm) {
        self.y.0 -= step.0;
    }

    /// Extra downward gap between sections
    pub fn gap(&mut self, step: Mm) {
        self.advance(step);
    }

    pub fn pages(&self) -> usize {
        self.pages
    }
}

/// Simple word-wrap to a fixed content width
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

struct ReportFonts {
    body: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Load report fonts, falling back to the builtin family when the
/// configured font file is missing or unreadable
fn load_fonts(doc: &PdfDocumentReference, config: &ReportConfig) -> Result<ReportFonts> {
    if let Some(path) = &config.font_path {
        match File::open(path).map_err(Error::Io).and_then(|file| {
            doc.add_external_font(file)
                .map_err(|e| Error::Report(format!("font embedding failed: {e}")))
        }) {
            Ok(font) => {
                return Ok(ReportFonts {
                    body: font.clone(),
                    bold: font,
                });
            }
            Err(e) => {
                tracing::warn!(
                    "custom report font {:?} unavailable ({}), falling back to builtin",
                    path,
                    e
                );
            }
        }
    }

    let body = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Report(format!("builtin font: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::Report(format!("builtin font: {e}")))?;
    Ok(ReportFonts { body, bold })
}

/// Flows lines onto the document, opening new pages as the cursor overflows
struct SectionWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: &'a ReportFonts,
    cursor: PageCursor,
}

impl<'a> SectionWriter<'a> {
    fn new(
        doc: &'a PdfDocumentReference,
        layer: PdfLayerReference,
        fonts: &'a ReportFonts,
    ) -> Self {
        Self {
            doc,
            layer,
            fonts,
            cursor: PageCursor::new(CONTENT_TOP, CONTENT_FLOOR),
        }
    }

    fn break_page_if_needed(&mut self) {
        if self.cursor.check_overflow() {
            let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
        }
    }

    fn title(&mut self, text: &str) {
        self.break_page_if_needed();
        self.layer
            .use_text(text, 18.0, MARGIN, self.cursor.y(), &self.fonts.bold);
        self.cursor.advance(Mm(8.0));
    }

    fn meta(&mut self, text: &str) {
        self.break_page_if_needed();
        self.layer
            .use_text(text, 9.0, MARGIN, self.cursor.y(), &self.fonts.body);
        self.cursor.advance(Mm(5.0));
    }

    fn heading(&mut self, text: &str) {
        self.cursor.gap(Mm(4.0));
        self.break_page_if_needed();
        self.layer
            .use_text(text, 13.0, MARGIN, self.cursor.y(), &self.fonts.bold);
        self.cursor.advance(Mm(7.0));
    }

    fn body_line(&mut self, text: &str, indent: Mm) {
        self.break_page_if_needed();
        self.layer.use_text(
            text,
            11.0,
            Mm(MARGIN.0 + indent.0),
            self.cursor.y(),
            &self.fonts.body,
        );
        self.cursor.advance(Mm(5.5));
    }

    /// Word-wrapped paragraph at body size
    fn paragraph(&mut self, text: &str, indent: Mm) {
        for line in wrap_text(text, WRAP_WIDTH) {
            self.body_line(&line, indent);
        }
    }

    fn footer_line(&mut self, text: &str) {
        self.break_page_if_needed();
        self.layer
            .use_text(text, 8.5, MARGIN, self.cursor.y(), &self.fonts.body);
        self.cursor.advance(Mm(4.0));
    }
}

fn labels_or_none<T>(items: &[T], label: impl Fn(&T) -> &'static str, none_label: &str) -> String {
    let labels: Vec<&str> = items
        .iter()
        .map(&label)
        .filter(|l| *l != none_label)
        .collect();
    if labels.is_empty() {
        none_label.to_string()
    } else {
        labels.join(", ")
    }
}

/// Render the analysis report and return the PDF bytes
///
/// The generation timestamp is supplied by the caller; nothing here reads
/// the clock.
pub fn render_report(
    profile: &Profile,
    bundle: &ResultBundle,
    generated_at: DateTime<Utc>,
    config: &ReportConfig,
) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Caffeine-Medication Compatibility Report",
        PAGE_WIDTH,
        PAGE_HEIGHT,
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let fonts = load_fonts(&doc, config)?;

    let mut w = SectionWriter::new(&doc, layer, &fonts);

    // Title block
    w.title("Caffeine-Medication Compatibility Report");
    w.meta(&format!(
        "Generated {}",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    // Personal information
    w.heading("Personal information");
    w.body_line(
        &format!(
            "Name: {}    Test date: {}",
            profile.name,
            profile.test_date.format("%Y-%m-%d")
        ),
        Mm(0.0),
    );
    w.body_line(
        &format!("Sex: {}    Age: {}", profile.sex.label(), profile.age),
        Mm(0.0),
    );
    w.body_line(
        &format!(
            "Weight: {} kg    Caffeine sensitivity: {}",
            profile.weight_kg,
            bundle.sensitivity_level.label()
        ),
        Mm(0.0),
    );

    // Caffeine intake
    w.heading("Caffeine intake");
    w.body_line(
        &format!(
            "Daily intake: {} cups (approx. {:.1} mg)",
            profile.caffeine_cups_per_day, bundle.actual_caffeine_mg
        ),
        Mm(0.0),
    );
    w.body_line(
        &format!("Recommended limit: {:.1} mg", bundle.max_caffeine_mg),
        Mm(0.0),
    );
    w.body_line(
        &format!("Assessment: {}", bundle.dosage_feedback.label()),
        Mm(0.0),
    );
    w.body_line(
        &format!("Main intake window: {}", profile.caffeine_time.label()),
        Mm(0.0),
    );

    // Medications and health context
    w.heading("Medications and health context");
    if profile.medications.is_empty() {
        w.body_line("Medications in use: none", Mm(0.0));
    } else {
        w.body_line("Medications in use:", Mm(0.0));
        for medication in &profile.medications {
            let label = crate::catalog::get_catalog().entry(*medication).label;
            w.body_line(&format!("- {label}"), Mm(4.0));
        }
    }
    w.body_line(
        &format!("Usual medication time: {}", profile.medication_time.label()),
        Mm(0.0),
    );
    w.paragraph(
        &format!(
            "Symptoms after caffeine: {}",
            labels_or_none(&profile.symptoms, |s| s.label(), "none")
        ),
        Mm(0.0),
    );
    w.paragraph(
        &format!(
            "Diagnosed conditions: {}",
            labels_or_none(&profile.conditions, |c| c.label(), "none")
        ),
        Mm(0.0),
    );

    // Drug-caffeine interactions
    w.heading("Drug-caffeine interaction analysis");
    if bundle.drug_interactions.is_empty() {
        w.body_line("No medications in use.", Mm(0.0));
    } else {
        for interaction in &bundle.drug_interactions {
            let label = crate::catalog::get_catalog().entry(interaction.medication).label;
            w.paragraph(&format!("> {label}"), Mm(0.0));
            w.paragraph(&interaction.message, Mm(4.0));
        }
    }

    // Timing analysis
    w.heading("Medication-caffeine timing");
    if bundle.timing_warnings.is_empty() {
        w.body_line(
            "No timing conflicts found with the current pattern.",
            Mm(0.0),
        );
    } else {
        for warning in &bundle.timing_warnings {
            w.paragraph(&format!("- {warning}"), Mm(0.0));
        }
    }

    // Recommendations
    w.heading("Recommendations");
    w.body_line("Recommended caffeine window:", Mm(0.0));
    w.paragraph(&bundle.safe_time_suggestion, Mm(4.0));
    w.body_line("Lifestyle and alternatives:", Mm(0.0));
    for tip in &bundle.recommendations {
        w.paragraph(&format!("- {tip}"), Mm(4.0));
    }

    // Disclaimer footer
    w.cursor.gap(Mm(6.0));
    w.footer_line("This report is based on self-reported input and does not replace professional medical advice.");
    w.footer_line("Guideline: up to 400 mg caffeine daily for healthy adults, 300 mg during pregnancy.");
    w.footer_line("For exact medication information, consult a doctor or pharmacist.");

    let pages = w.cursor.pages();
    tracing::debug!(pages, "report rendered");

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| Error::Report(format!("PDF save failed: {e}")))?;
    buf.into_inner()
        .map_err(|e| Error::Report(format!("PDF buffer error: {e}")))
}
