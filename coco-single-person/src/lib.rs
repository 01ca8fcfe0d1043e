//! Builds a single-person keypoints dataset from COCO.
//!
//! Every image keeps its primary person only. The image is cropped to that
//! person's bounding box and the annotation is remapped into the crop.

pub mod coco;
pub mod common;
pub mod config;
pub mod crop;
pub mod error;
pub mod output;
pub mod remap;
pub mod select;

use crate::{common::*, config::Config, select::SelectionStats};

/// The outcome of a finished run.
#[derive(Debug, Clone)]
pub struct Report {
    pub stats: SelectionStats,
    pub num_images: usize,
    pub annotation_file: PathBuf,
}

/// The entry of dataset building program.
///
/// Reads the subset from `coco_dir` and writes the cropped images and the
/// annotation file under `save_dir`. The annotation file is written last, so a
/// failed run leaves no annotation file behind.
pub fn start(config: &Config, coco_dir: &Path, save_dir: &Path) -> Result<Report> {
    let Config {
        ref subset,
        ref filter,
        rounding,
        output: ref output_config,
    } = *config;

    // load annotations
    info!("loading {} annotations from '{}'", subset, coco_dir.display());
    let source = coco::load_annotations(coco_dir, subset)?;
    info!(
        "loaded {} images and {} annotations",
        source.images.len(),
        source.annotations.len()
    );

    // keep the primary person per image
    let selection = select::select_primary_people(&source.annotations, filter, rounding)?;
    info!("selection: {}", selection.stats);

    // create dirs
    let save_image_dir = save_dir.join(subset);
    let save_annotation_file = coco::annotation_file(save_dir, subset);
    fs::create_dir_all(&save_image_dir)
        .with_context(|| format!("failed to create directory '{}'", save_image_dir.display()))?;
    if let Some(dir) = save_annotation_file.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory '{}'", dir.display()))?;
    }

    // crop images
    let num_people = selection.people.len();
    for (index, (&image_id, ann)) in selection.people.iter().enumerate() {
        let src_path = coco::image_file(coco_dir, subset, image_id);
        let dst_path = save_image_dir.join(coco::image_file_name(image_id));
        let rect = ann.rect()?;

        let size = crop::crop_image(&src_path, &dst_path, &rect, output_config.jpeg_quality)?;
        debug!(
            "[{}/{}] saved '{}' ({})",
            index + 1,
            num_people,
            dst_path.display(),
            size
        );
    }

    // save annotations
    let dataset = output::build_output(&source, &selection.people)?;
    dataset
        .save(&save_annotation_file)
        .with_context(|| {
            format!(
                "failed to write annotations file '{}'",
                save_annotation_file.display()
            )
        })?;
    info!(
        "saved {} images and annotations to '{}'",
        dataset.images.len(),
        save_annotation_file.display()
    );

    Ok(Report {
        stats: selection.stats,
        num_images: dataset.images.len(),
        annotation_file: save_annotation_file,
    })
}
