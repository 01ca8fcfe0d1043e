//! Assembly of the output annotation document.

use crate::{
    coco::{Annotation, AnnotationSet, Image},
    common::*,
    remap::anchor_to_crop,
};

/// Build the output document from the source document and the selected people.
///
/// Only images with a selected person are kept, in source order, and their
/// sizes become the bbox sizes. Annotations keep the selection order with
/// their bbox anchored at the crop origin. Metadata is copied as is.
pub fn build_output(
    source: &AnnotationSet,
    people: &IndexMap<u64, Annotation>,
) -> Result<AnnotationSet> {
    let images: Vec<Image> = source
        .images
        .iter()
        .filter_map(|image| people.get(&image.id).map(|ann| (image, ann)))
        .map(|(image, ann)| -> Result<_> {
            let size: HW<u32> = ann
                .rect()?
                .size()
                .try_cast()
                .ok_or_else(|| format_err!("bbox of annotation {:?} is too large", ann.id))?;
            Ok(Image {
                width: size.w(),
                height: size.h(),
                ..image.clone()
            })
        })
        .collect::<Result<_>>()?;

    let annotations: Vec<Annotation> = people
        .values()
        .map(|ann| anchor_to_crop(ann).map_err(Error::from))
        .collect::<Result<_>>()?;

    if images.len() != people.len() {
        warn!(
            "{} selected people refer to images absent from the image list",
            people.len() - images.len()
        );
    }

    Ok(AnnotationSet {
        info: source.info.clone(),
        licenses: source.licenses.clone(),
        images,
        annotations,
        categories: source.categories.clone(),
        extra: source.extra.clone(),
    })
}
