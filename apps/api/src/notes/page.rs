//! Server-rendered form page. Values are pulled from the submitted form at
//! trigger time; there is no live binding.

use crate::notes::form::{PatientInputDraft, CONDITION_LABEL, DIAGNOSIS_LABEL, HISTORY_LABEL};

/// Height of the read-only notes area, in CSS pixels.
pub const NOTES_AREA_HEIGHT_PX: u32 = 300;
const INPUT_AREA_HEIGHT_PX: u32 = 120;

/// Page template. Replace every `{placeholder}` before serving.
/// Each textarea start tag is followed by a newline: HTML parsing drops one
/// leading LF inside a textarea, and this keeps the value's own newlines.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Nursing Notes Assistant</title>
<style>
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
label { display: block; margin-top: 1rem; font-weight: bold; }
textarea { width: 100%; box-sizing: border-box; }
.warning { background: #fff4ce; border: 1px solid #e0b100; padding: 0.75rem; margin-top: 1rem; }
.error { background: #fde7e9; border: 1px solid #c50f1f; padding: 0.75rem; margin-top: 1rem; }
</style>
</head>
<body>
<h1>Nursing Notes Assistant</h1>
<p>Enter your patient details below, and the AI will help you generate nursing notes.</p>
<form method="post" action="/notes">
<label for="diagnosis">{diagnosis_label}</label>
<textarea id="diagnosis" name="diagnosis" style="height: {input_height}px">
{diagnosis}</textarea>
<label for="history">{history_label}</label>
<textarea id="history" name="history" style="height: {input_height}px">
{history}</textarea>
<label for="condition">{condition_label}</label>
<textarea id="condition" name="condition" style="height: {input_height}px">
{condition}</textarea>
<p><button type="submit">Generate Nursing Notes</button></p>
</form>
{banner}{result}</body>
</html>
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Warning(String),
    Error(String),
}

/// Everything one render of the page needs.
#[derive(Debug, Default)]
pub struct PageView {
    pub draft: PatientInputDraft,
    pub banner: Option<Banner>,
    pub notes: Option<String>,
}

impl PageView {
    pub fn render(&self) -> String {
        let banner = match &self.banner {
            Some(Banner::Warning(msg)) => {
                format!("<div class=\"warning\" role=\"alert\">{}</div>\n", escape_html(msg))
            }
            Some(Banner::Error(msg)) => {
                format!("<div class=\"error\" role=\"alert\">{}</div>\n", escape_html(msg))
            }
            None => String::new(),
        };

        let result = match &self.notes {
            Some(notes) => format!(
                "<h2>Generated Nursing Notes:</h2>\n\
                 <textarea id=\"notes\" readonly style=\"height: {NOTES_AREA_HEIGHT_PX}px\">\n{}</textarea>\n",
                escape_html(notes)
            ),
            None => String::new(),
        };

        PAGE_TEMPLATE
            .replace("{input_height}", &INPUT_AREA_HEIGHT_PX.to_string())
            .replace("{diagnosis_label}", DIAGNOSIS_LABEL)
            .replace("{history_label}", HISTORY_LABEL)
            .replace("{condition_label}", CONDITION_LABEL)
            .replace("{banner}", &banner)
            .replace("{result}", &result)
            .replace("{diagnosis}", &escape_html(&self.draft.diagnosis))
            .replace("{history}", &escape_html(&self.draft.history))
            .replace("{condition}", &escape_html(&self.draft.condition))
    }
}

/// Minimal HTML escaping for text and attribute content.
/// `{` and `}` are encoded too so user text can never look like a template placeholder.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_form_and_no_result() {
        let html = PageView::default().render();
        assert!(html.contains("<h1>Nursing Notes Assistant</h1>"));
        assert!(html.contains("Generate Nursing Notes</button>"));
        assert!(html.contains("name=\"diagnosis\""));
        assert!(html.contains("name=\"history\""));
        assert!(html.contains("name=\"condition\""));
        assert!(!html.contains("Generated Nursing Notes:"));
        assert!(!html.contains("role=\"alert\""));
        for placeholder in ["{diagnosis}", "{history}", "{condition}", "{banner}", "{result}"] {
            assert!(!html.contains(placeholder), "unfilled {placeholder}");
        }
    }

    #[test]
    fn test_notes_render_in_readonly_tall_area() {
        let view = PageView {
            notes: Some("Patient stable, continue monitoring.".to_string()),
            ..PageView::default()
        };
        let html = view.render();
        assert!(html.contains("<h2>Generated Nursing Notes:</h2>"));
        assert!(html.contains(
            "<textarea id=\"notes\" readonly style=\"height: 300px\">\nPatient stable, continue monitoring.</textarea>"
        ));
    }

    #[test]
    fn test_leading_newlines_survive_textarea_parsing() {
        let view = PageView {
            draft: PatientInputDraft {
                diagnosis: "\nCHF".to_string(),
                history: String::new(),
                condition: String::new(),
            },
            banner: None,
            notes: Some("\nLine one".to_string()),
        };
        let html = view.render();
        assert!(html.contains("readonly style=\"height: 300px\">\n\nLine one</textarea>"));
        assert!(html.contains("name=\"diagnosis\" style=\"height: 120px\">\n\nCHF</textarea>"));
    }

    #[test]
    fn test_submitted_values_are_preserved_and_escaped() {
        let view = PageView {
            draft: PatientInputDraft {
                diagnosis: "<script>alert(1)</script>".to_string(),
                history: "{banner}".to_string(),
                condition: "BP 130/85 & stable".to_string(),
            },
            banner: Some(Banner::Warning("careful".to_string())),
            notes: None,
        };
        let html = view.render();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&#123;banner&#125;"));
        assert!(html.contains("BP 130/85 &amp; stable"));
        assert_eq!(html.matches("class=\"warning\"").count(), 1);
    }

    #[test]
    fn test_error_banner_renders_without_notes() {
        let view = PageView {
            banner: Some(Banner::Error("An error occurred: boom".to_string())),
            ..PageView::default()
        };
        let html = view.render();
        assert!(html.contains("<div class=\"error\" role=\"alert\">An error occurred: boom</div>"));
        assert!(!html.contains("id=\"notes\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
