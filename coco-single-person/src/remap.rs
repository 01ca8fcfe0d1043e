//! Coordinate remapping of selected annotations into their crop frame.

use crate::{coco::Annotation, common::*, error::DatasetError};

/// Remap an annotation into the frame of its own bounding box.
///
/// The bbox is rounded component-wise to integers, keypoints become relative
/// to the rounded box origin, and the segmentation is cleared since masks are
/// not valid after cropping. The input is left untouched.
pub fn remap_annotation(ann: &Annotation, rounding: Rounding) -> Result<Annotation, DatasetError> {
    let rect = TLBR::try_from_ltwh_rounded(ann.bbox, rounding).map_err(|_| {
        DatasetError::InvalidBBox {
            annotation_id: ann.id,
            bbox: ann.bbox,
        }
    })?;

    Ok(Annotation {
        segmentation: Some(Value::Array(vec![])),
        bbox: rect.ltwh(),
        keypoints: ann
            .keypoints
            .as_ref()
            .map(|keypoints| keypoints.relative_to(&rect)),
        ..ann.clone()
    })
}

/// Move the annotation bbox to the origin of its cropped image, giving `[0, 0, w, h]`.
pub fn anchor_to_crop(ann: &Annotation) -> Result<Annotation, DatasetError> {
    let rect = ann.rect()?.to_origin();
    Ok(Annotation {
        bbox: rect.ltwh(),
        ..ann.clone()
    })
}
