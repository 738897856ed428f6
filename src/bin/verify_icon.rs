use image::io::Reader as ImageReader;

use edubot_icons::render::Layout;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/icons/generated/app_icon_1024.png".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking generated icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    if width != height {
        println!("⚠ Icon is not square");
        return;
    }

    let layout = Layout::for_size(width);

    // The corners sit outside the rounded mask and must match the flattened
    // base color, which equals the gradient color of the top row.
    let corner = rgba_img.get_pixel(0, 0);
    let top_center = rgba_img.get_pixel(width / 2, 0);
    println!(
        "\nCorner pixel: [{}, {}, {}, {}], top center: [{}, {}, {}, {}]",
        corner[0], corner[1], corner[2], corner[3],
        top_center[0], top_center[1], top_center[2], top_center[3]
    );

    if corner == top_center && corner[3] == 255 {
        println!("✓ Rounded-corner base color detected");
    } else {
        println!("⚠ Corner color does not match the gradient top");
    }

    // The head fill is a bright neutral; sample the head center.
    let head = rgba_img.get_pixel(layout.head_cx as u32, layout.head_cy as u32);
    println!(
        "\nHead center pixel (x={}, y={}): [{}, {}, {}, {}]",
        layout.head_cx as u32, layout.head_cy as u32, head[0], head[1], head[2], head[3]
    );

    if head[0] > 200 && head[1] > 200 && head[2] > 200 {
        println!("✓ Robot head detected");
    } else {
        println!("⚠ Head fill not found at the expected position");
    }

    let transparent = rgba_img.pixels().filter(|p| p[3] != 255).count();
    if transparent == 0 {
        println!("✓ Icon is fully opaque");
    } else {
        println!("⚠ {} pixels are not fully opaque", transparent);
    }
}
