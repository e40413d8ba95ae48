//! QR code usage walkthrough - direct library calls
//!
//! Run with: cargo run --example usage
//!
//! Writes sample images to `./qr_output/`.

use qr_core::{
    get_data_url, save_qr_base64_to_file, text_to_qr_base64, Color, OutputFormat, QrOptions,
};

fn preview(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let defaults = QrOptions::default();

    println!("=== 1. Plain text ===");
    let text1 = "Hello, World!";
    let base64_1 = text_to_qr_base64(text1, &defaults)?;
    println!("Text: {}", text1);
    println!("Base64 (first 50 chars): {}...\n", preview(&base64_1, 50));

    println!("=== 2. Non-ASCII text ===");
    let text2 = "你好，世界！这是一个QR码测试";
    let base64_2 = text_to_qr_base64(text2, &defaults)?;
    println!("Text: {}", text2);
    println!("Base64 (first 50 chars): {}...\n", preview(&base64_2, 50));

    println!("=== 3. URL ===");
    let text3 = "https://www.example.com";
    let base64_3 = text_to_qr_base64(text3, &defaults)?;
    println!("Text: {}", text3);
    println!("Base64 (first 50 chars): {}...\n", preview(&base64_3, 50));

    println!("=== 4. Custom style ===");
    let text4 = "Custom Style QR Code";
    let styled = QrOptions::default()
        .with_box_size(15)
        .with_border(2)
        .with_fill_color("darkblue".parse::<Color>()?)
        .with_back_color("lightgray".parse::<Color>()?);
    let base64_4 = text_to_qr_base64(text4, &styled)?;
    println!("Text: {}", text4);
    println!("Base64 (first 50 chars): {}...\n", preview(&base64_4, 50));

    println!("=== 5. Data URL ===");
    let data_url = get_data_url(&base64_1, OutputFormat::Png);
    println!("Data URL (first 100 chars): {}...", preview(&data_url, 100));
    println!("Usable directly as the src of an <img> tag\n");

    println!("=== 6. Save to file ===");
    let out_dir = std::path::Path::new("qr_output");
    std::fs::create_dir_all(out_dir)?;
    for (name, payload) in [("chinese_qr.png", &base64_2), ("custom_style_qr.png", &base64_4)] {
        let path = out_dir.join(name);
        match save_qr_base64_to_file(payload, &path, OutputFormat::Png) {
            Ok(()) => println!("Saved {}", path.display()),
            Err(e) => println!("Failed to save {}: {}", path.display(), e),
        }
    }

    Ok(())
}
