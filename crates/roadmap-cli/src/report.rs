//! Human-readable summary of an updated roadmap

use roadmap_types::Roadmap;

/// Banner printed before the summary of a successful update
pub const SUCCESS_BANNER: &str = "✓ SUCCESS! Roadmap updated with:";

/// Printed when the fixture lists no roadmaps
pub const NO_ROADMAPS: &str = "No roadmaps found!";

/// Render the post-update summary for the roadmap echoed by the server
///
/// Counts come first, then one line per eje and one per iniciativa in the
/// order the server returned them. The result ends with a newline.
pub fn render_update_summary(roadmap: &Roadmap) -> String {
    let mut lines = vec![
        SUCCESS_BANNER.to_string(),
        format!("  - Title: {}", roadmap.title),
        format!("  - Ejes: {} ejes", roadmap.ejes_estrategicos.len()),
        format!("  - Iniciativas: {} iniciativas", roadmap.iniciativas.len()),
        String::new(),
        "Ejes estratégicos created:".to_string(),
    ];

    lines.extend(
        roadmap
            .ejes_estrategicos
            .iter()
            .map(|eje| format!("  ✓ {} (ID: {}, Color: {})", eje.nombre, eje.id, eje.color)),
    );

    lines.push(String::new());
    lines.push("Iniciativas created:".to_string());
    lines.extend(roadmap.iniciativas.iter().map(|init| {
        format!(
            "  ✓ {} (Eje: {}, Certeza: {})",
            init.nombre, init.eje, init.certeza
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
