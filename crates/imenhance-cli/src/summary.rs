use std::path::Path;

use console::Style;
use imenhance_core::EnhancementPipeline;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_image_summary(file: &Path, pipeline: &EnhancementPipeline) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Image Enhancement"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(file.display()));

    let Some(source) = pipeline.source() else {
        return;
    };
    println!(
        "  {:<14}{}",
        s.label.apply_to("Working size"),
        s.value.apply_to(format!("{}x{}", source.width(), source.height()))
    );
    if let Some(avg) = pipeline.average_intensity() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Avg luma"),
            s.value.apply_to(format!("{avg:.1}"))
        );
    }
    if let Some(class) = pipeline.intensity() {
        let table = pipeline.curves().select(class);
        println!(
            "  {:<14}{}",
            s.label.apply_to("Intensity"),
            s.method.apply_to(class)
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("Gamma"),
            s.value.apply_to(table.gamma())
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Luma output"),
        s.method.apply_to(pipeline.config().luma_output)
    );
    println!();
}
