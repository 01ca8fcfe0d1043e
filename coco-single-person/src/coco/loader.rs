use super::AnnotationSet;
use crate::{common::*, error::DatasetError};

/// The annotation file of a subset, `<root>/annotations/person_keypoints_<subset>.json`.
pub fn annotation_file(root: &Path, subset: &str) -> PathBuf {
    root.join("annotations")
        .join(format!("person_keypoints_{}.json", subset))
}

/// The conventional image file name, the 12-digit zero-padded image id.
pub fn image_file_name(image_id: u64) -> String {
    format!("{:012}.jpg", image_id)
}

/// The image file of a subset, `<root>/<subset>/<image_id:012>.jpg`.
pub fn image_file(root: &Path, subset: &str, image_id: u64) -> PathBuf {
    root.join(subset).join(image_file_name(image_id))
}

/// Load the keypoints annotations of a COCO subset.
pub fn load_annotations(coco_dir: &Path, subset: &str) -> Result<AnnotationSet> {
    let path = annotation_file(coco_dir, subset);
    if !path.is_file() {
        return Err(DatasetError::MissingFile { path }.into());
    }

    let set = AnnotationSet::open(&path)
        .with_context(|| format!("failed to load annotations file '{}'", path.display()))?;
    Ok(set)
}
