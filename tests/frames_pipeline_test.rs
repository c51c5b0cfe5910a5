//! Tests for building bars from directories of already-extracted frames.

mod common;

use color_reduce::Method;
use common::fixtures::{self, colors::*};
use movie_colorbar::error::ColorbarError;
use movie_colorbar::services::{BarPipeline, FrameError};
use pretty_assertions::assert_eq;

#[test]
fn test_rgb_bar_follows_frame_order() {
    let dir = tempfile::tempdir().unwrap();
    let sequence = [RED, GREEN, BLUE, GREY, BLACK];
    fixtures::write_frames(dir.path(), &sequence);

    let pipeline = BarPipeline::new(fixtures::settings(Method::Rgb));
    let bar = pipeline.build_from_frames(dir.path()).unwrap();

    assert_eq!(bar.colors(), &sequence);
    assert_eq!((bar.width(), bar.height()), (5, 2));
}

#[test]
fn test_frames_sorted_numerically() {
    let dir = tempfile::tempdir().unwrap();
    // Unpadded names: a plain name sort would put "10.png" second.
    for index in 1..=10 {
        let color = if index == 10 { RED } else { GREY };
        image::RgbImage::from_pixel(8, 8, image::Rgb(color))
            .save(dir.path().join(format!("{index}.png")))
            .unwrap();
    }

    let pipeline = BarPipeline::new(fixtures::settings(Method::Rgb));
    let bar = pipeline.build_from_frames(dir.path()).unwrap();

    assert_eq!(bar.colors().len(), 10);
    assert_eq!(bar.colors()[9], RED);
    assert!(bar.colors()[..9].iter().all(|c| *c == GREY));
}

#[test]
fn test_solid_frames_keep_their_color_for_every_method() {
    let dir = tempfile::tempdir().unwrap();
    let sequence = [RED, GREEN, BLUE];
    fixtures::write_frames(dir.path(), &sequence);

    for method in Method::ALL {
        if method == Method::Hue {
            continue;
        }
        let pipeline = BarPipeline::new(fixtures::settings(method));
        let bar = pipeline.build_from_frames(dir.path()).unwrap();
        common::assert_colors_close(bar.colors(), &sequence, 1);
    }
}

#[test]
fn test_hue_method_saturates() {
    let dir = tempfile::tempdir().unwrap();
    fixtures::write_frames(dir.path(), &[RED]);

    let pipeline = BarPipeline::new(fixtures::settings(Method::Hue));
    let bar = pipeline.build_from_frames(dir.path()).unwrap();

    common::assert_color_close(bar.colors()[0], [255, 0, 45], 1);
}

#[test]
fn test_majority_color_wins_for_common() {
    let dir = tempfile::tempdir().unwrap();
    fixtures::write_split_frame(dir.path(), 1, BLUE, RED, 0.7);

    // Work at full size so the resize does not blend the boundary.
    let mut settings = fixtures::settings(Method::Common);
    settings.frame_size = 100;
    let bar = BarPipeline::new(settings)
        .build_from_frames(dir.path())
        .unwrap();

    assert_eq!(bar.colors(), &[BLUE]);
}

#[test]
fn test_process_frames_dir_writes_png() {
    let frames = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let sequence = [RED, GREEN, BLUE, GREY, BLACK, RED, GREEN, BLUE, GREY, BLACK];
    fixtures::write_frames(frames.path(), &sequence);

    let output = out.path().join("bar.png");
    let pipeline = BarPipeline::new(fixtures::settings(Method::Lab));
    let result = pipeline.process_frames_dir(frames.path(), &output).unwrap();

    assert_eq!(result.output, output);
    let image = common::assert_png_file(&output);
    assert_eq!(image.dimensions(), (10, 4));
    common::assert_bar_columns(&image, result.bar.colors());
}

#[test]
fn test_seeded_kmeans_independent_of_workers() {
    let dir = tempfile::tempdir().unwrap();
    for index in 1..=8 {
        fixtures::write_split_frame(dir.path(), index, RED, BLUE, index as f64 / 10.0);
    }

    let mut sequential = fixtures::settings(Method::Kmeans);
    sequential.workers = 1;
    let mut parallel = sequential.clone();
    parallel.workers = 4;

    let a = BarPipeline::new(sequential)
        .build_from_frames(dir.path())
        .unwrap();
    let b = BarPipeline::new(parallel)
        .build_from_frames(dir.path())
        .unwrap();

    assert_eq!(a.colors(), b.colors());
}

#[test]
fn test_empty_directory_is_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"no frames here").unwrap();

    let pipeline = BarPipeline::new(fixtures::settings(Method::Rgb));
    let err = pipeline.build_from_frames(dir.path()).unwrap_err();

    assert!(matches!(err, ColorbarError::Frame(FrameError::NoFrames(_))));
}

#[test]
fn test_corrupt_frame_aborts_without_output() {
    let frames = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fixtures::write_frames(frames.path(), &[RED, GREEN]);
    std::fs::write(frames.path().join("00003.png"), b"truncated").unwrap();

    let output = out.path().join("bar.png");
    let pipeline = BarPipeline::new(fixtures::settings(Method::Rgb));
    let err = pipeline
        .process_frames_dir(frames.path(), &output)
        .unwrap_err();

    assert!(matches!(err, ColorbarError::Frame(FrameError::Decode { .. })));
    assert!(!output.exists(), "No partial bar should be written");
}
