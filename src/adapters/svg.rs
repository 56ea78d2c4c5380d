use crate::core::layout::layout;
use crate::core::{Encoded, RenderSettings, Renderer, Result};

const TEXT_HEIGHT: u32 = 14;

/// Draws one `<rect>` per bar on a white background.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgRenderer {
    pub module_width: u32,
    pub bar_height: u32,
    pub space_scale: f64,
    pub show_text: bool,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            module_width: 2,
            bar_height: 60,
            space_scale: 1.0,
            show_text: true,
        }
    }
}

impl SvgRenderer {
    pub fn from_settings<S: RenderSettings>(settings: &S) -> Self {
        Self {
            module_width: settings.module_width(),
            bar_height: settings.bar_height(),
            space_scale: settings.space_scale(),
            show_text: settings.show_text(),
        }
    }
}

fn px(value: f64) -> String {
    // 去掉多餘的小數位，讓輸出穩定易讀
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&self, encoded: &Encoded) -> Result<String> {
        let bars = layout(&encoded.sequence, self.space_scale)?;
        let unit = f64::from(self.module_width);
        let width = bars.total_width * unit;
        let height = self.bar_height + if self.show_text { TEXT_HEIGHT } else { 0 };

        let mut svg = String::new();
        svg.push_str(&format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##,
            w = px(width),
            h = height
        ));
        svg.push_str(&format!(
            r##"<rect x="0" y="0" width="{}" height="{}" fill="#ffffff"/>"##,
            px(width),
            height
        ));
        for bar in &bars.bars {
            svg.push_str(&format!(
                r##"<rect x="{}" y="0" width="{}" height="{}" fill="#000000"/>"##,
                px(bar.x * unit),
                px(bar.width * unit),
                self.bar_height
            ));
        }
        if self.show_text {
            svg.push_str(&format!(
                r##"<text x="{}" y="{}" font-family="monospace" font-size="12" text-anchor="middle">{}</text>"##,
                px(width / 2.0),
                height - 2,
                escape(&encoded.payload)
            ));
        }
        svg.push_str("</svg>");

        tracing::debug!(
            "Rendered {} bars into {}x{} SVG",
            bars.bars.len(),
            px(width),
            height
        );
        Ok(svg)
    }
}
