use edubot_icons::icon_gen::{generate_icons, Options, ANDROID_SIZES, IOS_SIZES};
use std::path::Path;
use tempfile::TempDir;

fn options(output: &Path) -> Options {
    Options {
        output: output.to_path_buf(),
        png: None,
        ios: false,
        android: false,
        color_top: "#4f46e5".to_string(),
        color_bottom: "#ec4899".to_string(),
    }
}

/// Default run: both platform sets, the master icon and the iOS Contents.json.
#[test]
fn test_full_generation_produces_every_configured_icon() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("generated");

    generate_icons(&options(&output_dir)).expect("generation failed");

    for spec in IOS_SIZES {
        let path = output_dir.join(format!("ios_icon_{0}x{0}_{1}.png", spec.size, spec.label));
        assert!(path.exists(), "missing {}", path.display());

        let img = image::open(&path).expect("Failed to load generated icon");
        assert_eq!(img.width(), spec.size);
        assert_eq!(img.height(), spec.size);
    }

    for spec in ANDROID_SIZES {
        let path = output_dir.join(format!(
            "android_icon_{0}x{0}_{1}.png",
            spec.size, spec.label
        ));
        assert!(path.exists(), "missing {}", path.display());

        let img = image::open(&path).expect("Failed to load generated icon");
        assert_eq!(img.width(), spec.size);
    }

    assert!(output_dir.join("app_icon_1024.png").exists());

    // Contents.json exists and is valid JSON with the expected structure.
    let contents_json_path = output_dir.join("Contents.json");
    assert!(
        contents_json_path.exists(),
        "Contents.json file should exist at: {}",
        contents_json_path.display()
    );

    let contents = std::fs::read_to_string(&contents_json_path).expect("read Contents.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&contents).expect("Contents.json should contain valid JSON");

    let images = parsed["images"].as_array().expect("images array");
    assert_eq!(images.len(), IOS_SIZES.len());
    for (i, image) in images.iter().enumerate() {
        assert!(image["filename"].is_string(), "entry {i} missing filename");
        assert!(image["idiom"].is_string(), "entry {i} missing idiom");
        assert!(image["scale"].is_string(), "entry {i} missing scale");
    }
    assert!(images
        .iter()
        .any(|image| image["idiom"] == "ios-marketing"));

    assert_eq!(parsed["info"]["version"], 1);
    assert!(parsed["info"]["author"].is_string());
}

#[test]
fn test_platform_flags_limit_the_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("ios_only");

    let opts = Options {
        ios: true,
        ..options(&output_dir)
    };
    generate_icons(&opts).expect("generation failed");

    assert!(output_dir.join("ios_icon_20x20_20pt.png").exists());
    assert!(output_dir.join("Contents.json").exists());
    assert!(!output_dir.join("android_icon_48x48_mdpi.png").exists());
    assert!(!output_dir.join("app_icon_1024.png").exists());
}

#[test]
fn test_custom_sizes_replace_the_platform_sets() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("custom");

    let opts = Options {
        png: Some(vec![16, 33]),
        ..options(&output_dir)
    };
    generate_icons(&opts).expect("generation failed");

    for size in [16u32, 33] {
        let path = output_dir.join(format!("{size}x{size}.png"));
        let img = image::open(&path).expect("Failed to load generated icon");
        assert_eq!(img.width(), size);
        assert_eq!(img.height(), size);
    }
    assert!(!output_dir.join("ios_icon_20x20_20pt.png").exists());
}

#[test]
fn test_gradient_override_reaches_the_pixels() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("recolored");

    let opts = Options {
        android: true,
        color_top: "#000000".to_string(),
        color_bottom: "#ffffff".to_string(),
        ..options(&output_dir)
    };
    generate_icons(&opts).expect("generation failed");

    let img = image::open(output_dir.join("android_icon_36x36_ldpi.png"))
        .expect("Failed to load generated icon")
        .to_rgba8();

    // Corners flatten onto the overridden top color; the bottom edge runs
    // almost to the overridden bottom color.
    assert_eq!(*img.get_pixel(0, 0), image::Rgba([0, 0, 0, 255]));
    assert_eq!(*img.get_pixel(18, 0), image::Rgba([0, 0, 0, 255]));
    let bottom = img.get_pixel(18, 35);
    assert!(bottom[0] > 240 && bottom[1] > 240 && bottom[2] > 240);
}

#[test]
fn test_zero_custom_size_aborts_the_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("invalid");

    let opts = Options {
        png: Some(vec![0]),
        ..options(&output_dir)
    };
    assert!(generate_icons(&opts).is_err());
    assert!(!output_dir.join("0x0.png").exists());
}
