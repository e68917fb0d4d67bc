//! Export of rendered mounts as SVG files, PNG images or a single HTML page.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use super::geometry::{measure, placeholder_svg, FONT_FAMILY};
use super::palette::{MUTED_TEXT, TEXT_COLOR, TOOLTIP_BACKGROUND, TOOLTIP_TEXT};
use super::scene::{escape_xml, num, Mount};
use super::tooltip::Tooltip;


const PNG_BACKGROUND: (u8, u8, u8) = (255, 255, 255);
pub const HTML_FILE_NAME: &str = "dashboard.html";
pub const TOOLTIP_ELEMENT_ID: &str = "chart-tooltip";


/// SVG markup for a mount: its chart, its placeholder, or nothing if never rendered.
pub fn mount_svg(mount: &Mount) -> Option<String> {
    if let Some(surface) = mount.surface() {
        return Some(surface.root.to_svg_string());
    }
    mount
        .placeholder()
        .map(|message| placeholder_svg(measure(mount), message).to_svg_string())
}


/// Write one `<mount-id>.svg` per rendered mount.
pub fn export_svgs(mounts: &[Mount], output_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(output_dir)?;

    let mut written = Vec::new();
    for mount in mounts {
        let Some(svg) = mount_svg(mount) else {
            continue;
        };
        let path = output_dir.join(format!("{}.svg", mount.id()));
        std::fs::write(&path, svg)
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}


/// Rasterize every rendered mount to `<mount-id>.png`.
pub fn export_pngs(mounts: &[Mount], output_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(output_dir)?;

    let mut written = Vec::new();
    for mount in mounts {
        let Some(svg) = mount_svg(mount) else {
            continue;
        };
        let path = output_dir.join(format!("{}.png", mount.id()));
        rasterize(&svg, &path)?;
        written.push(path);
    }

    Ok(written)
}


fn rasterize(svg: &str, output_path: &Path) -> Result<()> {
    let tree = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default())
        .context("Failed to parse SVG")?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .context("Failed to create pixmap")?;

    let (r, g, b) = PNG_BACKGROUND;
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.save_png(output_path)
        .with_context(|| format!("Failed to save PNG to {}", output_path.display()))?;

    Ok(())
}


/// Write every mount plus the shared tooltip element into one HTML page.
pub fn export_html(mounts: &[Mount], tooltip: &Tooltip, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        ensure_dir(parent)?;
    }

    let html = generate_html(mounts, tooltip);
    std::fs::write(output_path, html)
        .with_context(|| format!("Failed to write HTML to {}", output_path.display()))?;

    Ok(())
}


fn generate_html(mounts: &[Mount], tooltip: &Tooltip) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, r#"<html lang="en">"#);
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, r#"<meta charset="utf-8">"#);
    let _ = writeln!(html, "<title>Chart dashboard</title>");
    let _ = writeln!(html, "<style>");
    let _ = writeln!(html, "  body {{ font-family: {FONT_FAMILY}; color: {TEXT_COLOR}; margin: 24px; }}");
    let _ = writeln!(html, "  .grid {{ display: flex; flex-wrap: wrap; gap: 16px; }}");
    let _ = writeln!(html, "  .chart {{ border: 1px solid #e2e8f0; border-radius: 8px; padding: 8px; }}");
    let _ = writeln!(html, "  .empty {{ display: flex; align-items: center; justify-content: center; color: {MUTED_TEXT}; font-size: 12px; }}");
    let _ = writeln!(html, "  footer {{ margin-top: 16px; color: {MUTED_TEXT}; font-size: 11px; }}");
    let _ = writeln!(html, "</style>");
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, r#"<div class="grid">"#);

    for mount in mounts {
        let size = measure(mount);
        let id = escape_xml(mount.id());
        match (mount.surface(), mount.placeholder()) {
            (Some(surface), _) => {
                let _ = writeln!(html, r#"<div class="chart" id="{id}">{}</div>"#, surface.root.to_svg_string());
            }
            (None, Some(message)) => {
                let _ = writeln!(
                    html,
                    r#"<div class="chart empty" id="{id}" style="width: {}px; height: {}px">{}</div>"#,
                    num(size.width),
                    num(size.height),
                    escape_xml(message)
                );
            }
            (None, None) => {
                let _ = writeln!(html, r#"<div class="chart" id="{id}"></div>"#);
            }
        }
    }

    let _ = writeln!(html, "</div>");

    let position = tooltip.position();
    let _ = writeln!(
        html,
        r#"<div id="{TOOLTIP_ELEMENT_ID}" style="position: absolute; pointer-events: none; left: {}px; top: {}px; opacity: {}; background: {TOOLTIP_BACKGROUND}; color: {TOOLTIP_TEXT}; padding: 6px 8px; border-radius: 6px; font-size: 11px; white-space: pre-line; transition: opacity 120ms ease">{}</div>"#,
        num(position.x),
        num(position.y),
        tooltip.opacity(),
        escape_xml(tooltip.text())
    );

    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");
    let _ = writeln!(html, "<footer>Generated {generated}</footer>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}


fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))
}


/// Open file with default application.
pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    Ok(())
}
