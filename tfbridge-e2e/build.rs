use std::path::Path;

fn main() {
    tfbridge_codegen::build::generate_to_out_dir(
        Path::new("tests/fixtures/widget_provider.json"),
        Some("Example"),
        "widget_bridge.rs",
    )
    .expect("Failed to generate widget bindings");
}
