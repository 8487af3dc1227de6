use fracicon::{ExportOptions, IconError, export_icons};

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "fracicon_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn batch_writes_one_png_per_size_in_order() {
    let out_dir = temp_dir("batch");
    let opts = ExportOptions {
        out_dir: out_dir.clone(),
        ..ExportOptions::default()
    };

    let paths = export_icons(&opts).unwrap();
    assert_eq!(paths.len(), 4);
    for (path, size) in paths.iter().zip([16u32, 32, 48, 96]) {
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("icon-{size}.png")
        );
        let img = image::open(path).unwrap();
        assert_eq!((img.width(), img.height()), (size, size));
    }

    std::fs::remove_dir_all(&out_dir).unwrap();
}

#[test]
fn rerun_against_existing_directory_succeeds() {
    let out_dir = temp_dir("rerun");
    let opts = ExportOptions {
        out_dir: out_dir.clone(),
        sizes: vec![16, 32],
        ..ExportOptions::default()
    };

    let first = export_icons(&opts).unwrap();
    let second = export_icons(&opts).unwrap();
    assert_eq!(first, second);

    std::fs::remove_dir_all(&out_dir).unwrap();
}

#[test]
fn invalid_size_in_the_list_aborts_the_batch() {
    let out_dir = temp_dir("invalid");
    let opts = ExportOptions {
        out_dir: out_dir.clone(),
        sizes: vec![16, 0, 48],
        ..ExportOptions::default()
    };

    let err = export_icons(&opts).unwrap_err();
    assert!(matches!(err, IconError::InvalidSize { size: 0, .. }));

    std::fs::remove_dir_all(&out_dir).unwrap();
}
