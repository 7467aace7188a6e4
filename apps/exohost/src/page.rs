//! # Calculator Page
//!
//! Server-rendered HTML for the form: two range inputs, a submit button and
//! an output region. The output region shows the model string verbatim.

use exohost_core::{SliderSpec, MASS_SLIDER, METALLICITY_SLIDER};

/// Text shown in the output region before the first calculation.
pub const PLACEHOLDER: &str = "Waiting for input...";

pub const TITLE: &str = "Exoplanet Probability Calculator";
pub const SUBTITLE: &str = "Based on the Tsallis Non-Extensive Statistical Mechanics Framework";
pub const DESCRIPTION: &str = "Adjust the properties of a hypothetical star below. Our \
phenomenological model, trained on 197,000 stars from the Kepler DR25 catalog, will calculate \
the probability that it hosts a detectable exoplanetary system.";
pub const OUTPUT_LABEL: &str = "Probability of Hosting an Exoplanet";
pub const BUTTON_LABEL: &str = "Calculate Probability";
pub const FOOTER: &str = "Developed by Ahmed Hesham for arXiv Publication.";

const STYLE: &str = r#"
body { font-family: ui-monospace, Menlo, Consolas, monospace; background: #fff; color: #111;
       max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
h1 { margin-bottom: 0.2rem; }
h3 { font-weight: normal; margin-top: 0; }
.row { display: flex; gap: 2rem; flex-wrap: wrap; }
.col { flex: 1; min-width: 280px; }
.field { border: 1px solid #111; padding: 0.8rem; margin-bottom: 1rem; }
.field label { font-weight: bold; display: block; }
.field small { color: #555; display: block; margin-bottom: 0.4rem; }
.field input[type=range] { width: 80%; }
button { width: 100%; padding: 0.7rem; background: #111; color: #fff; border: none;
         font: inherit; cursor: pointer; }
.output { border: 1px solid #111; padding: 0.8rem; min-height: 3rem; }
.output pre { font-size: 1.6rem; margin: 0.4rem 0 0; }
.error { color: #a00; }
hr { margin-top: 2rem; }
"#;

/// State of one rendering of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub stellar_mass: f64,
    pub metallicity: f64,
    pub output: String,
    pub error: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::initial()
    }
}

impl Page {
    /// Sliders at their defaults, output showing the placeholder.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            stellar_mass: MASS_SLIDER.default,
            metallicity: METALLICITY_SLIDER.default,
            output: PLACEHOLDER.to_string(),
            error: None,
        }
    }

    /// Sliders at the submitted values, output replaced by `output`.
    ///
    /// Values outside a slider's range are pulled back inside for display only.
    #[must_use]
    pub fn with_result(stellar_mass: f64, metallicity: f64, output: impl Into<String>) -> Self {
        Self {
            stellar_mass: MASS_SLIDER.clamp(stellar_mass),
            metallicity: METALLICITY_SLIDER.clamp(metallicity),
            output: output.into(),
            error: None,
        }
    }

    /// Sliders at their defaults, output left as the placeholder, error shown.
    #[must_use]
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::initial()
        }
    }

    /// Render the full HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        let error = self
            .error
            .as_deref()
            .map(|e| format!("<p class=\"error\">{}</p>\n", escape_html(e)))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<h1>{title}</h1>
<h3>{subtitle}</h3>
<p>{description}</p>
<form method="post" action="/calculate">
<div class="row">
<div class="col">
{mass}
{metal}
<button type="submit">{button}</button>
</div>
<div class="col">
<div class="output">
<label for="result">{output_label}</label>
<pre id="result">{output}</pre>
</div>
{error}</div>
</div>
</form>
<hr>
<p><em>{footer}</em></p>
</body>
</html>
"#,
            title = TITLE,
            style = STYLE,
            subtitle = SUBTITLE,
            description = DESCRIPTION,
            mass = render_slider(&MASS_SLIDER, self.stellar_mass),
            metal = render_slider(&METALLICITY_SLIDER, self.metallicity),
            button = BUTTON_LABEL,
            output_label = OUTPUT_LABEL,
            output = escape_html(&self.output),
            error = error,
            footer = FOOTER,
        )
    }
}

fn render_slider(slider: &SliderSpec, value: f64) -> String {
    format!(
        r#"<div class="field">
<label for="{name}">{label}</label>
<small>{info}</small>
<input type="range" id="{name}" name="{name}" min="{min}" max="{max}" step="{step}" value="{value:.2}" oninput="this.nextElementSibling.value = Number(this.value).toFixed(2)">
<output>{value:.2}</output>
</div>"#,
        name = slider.name,
        label = escape_html(slider.label),
        info = escape_html(slider.info),
        min = slider.min,
        max = slider.max,
        step = slider.step,
        value = value,
    )
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_page_shows_placeholder_and_sliders() {
        let html = Page::initial().render();
        assert!(html.contains(TITLE));
        assert!(html.contains(PLACEHOLDER));
        assert!(html.contains(r#"name="stellar_mass" min="0.1" max="2.5" step="0.05" value="1.00""#));
        assert!(html.contains(r#"name="metallicity" min="-1" max="0.5" step="0.05" value="0.00""#));
        assert!(html.contains(BUTTON_LABEL));
        assert!(html.contains(FOOTER));
    }

    #[test]
    fn result_replaces_placeholder() {
        let html = Page::with_result(1.0, 0.0, "2.21%").render();
        assert!(html.contains(r#"<pre id="result">2.21%</pre>"#));
        assert!(!html.contains(PLACEHOLDER));
    }

    #[test]
    fn out_of_range_values_are_pinned_for_display() {
        let page = Page::with_result(9.0, -4.0, "x");
        assert_eq!(page.stellar_mass, 2.5);
        assert_eq!(page.metallicity, -1.0);
    }

    #[test]
    fn error_is_escaped() {
        let html = Page::with_error("<script>").render();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(PLACEHOLDER));
    }

    #[test]
    fn escape_all_specials() {
        assert_eq!(escape_html(r#"a&b<c>"d'"#), "a&amp;b&lt;c&gt;&quot;d&#39;");
    }
}
