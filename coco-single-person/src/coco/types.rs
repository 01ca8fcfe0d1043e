use crate::{common::*, error::DatasetError};

/// A whole COCO annotation document.
///
/// Fields are declared in the order COCO writes them. Optional keys are only
/// written back when they were present in the input, `null` included, and
/// unknown keys are carried verbatim after the known ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Value>,
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub categories: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnnotationSet {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let set = serde_json::from_reader(reader)?;
        Ok(set)
    }

    /// Write the document in compact JSON.
    pub fn save<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub license: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub coco_url: Option<Value>,
    pub height: u32,
    pub width: u32,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub date_captured: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub flickr_url: Option<Value>,
    pub id: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Polygons or RLE masks, kept opaque.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub segmentation: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_keypoints: Option<u32>,
    /// The area as written in the input, integer or float.
    pub area: Number,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub iscrowd: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keypoints: Option<Keypoints<f64>>,
    pub image_id: u64,
    /// The box in `[x, y, w, h]` layout.
    pub bbox: [f64; 4],
    pub category_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Annotation {
    /// The bounding box as a rectangle.
    pub fn rect(&self) -> Result<TLBR<f64>, DatasetError> {
        TLBR::try_from_ltwh(self.bbox).map_err(|_| DatasetError::InvalidBBox {
            annotation_id: self.id,
            bbox: self.bbox,
        })
    }

    pub fn area_value(&self) -> f64 {
        self.area.as_f64().unwrap_or(0.0)
    }

    /// The number of labeled keypoints, zero if the key is absent.
    pub fn keypoint_count(&self) -> u32 {
        self.num_keypoints.unwrap_or(0)
    }
}

/// Keep a key that is present in the input, even if its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "info": {"description": "COCO 2017 Dataset", "year": 2017},
        "licenses": [{"url": "http://creativecommons.org/licenses/by-nc-sa/2.0/", "id": 1, "name": "Attribution-NonCommercial-ShareAlike License"}],
        "images": [
            {"license": 4, "file_name": "000000397133.jpg", "coco_url": "http://images.cocodataset.org/val2017/000000397133.jpg", "height": 427, "width": 640, "date_captured": "2013-11-14 17:02:52", "id": 397133}
        ],
        "annotations": [
            {"segmentation": [[125.12, 539.69, 140.94, 522.43]], "num_keypoints": 10, "area": 47803.27955, "iscrowd": 0,
             "keypoints": [0, 0, 0, 0, 0, 0, 142, 309, 1, 177, 320, 2],
             "image_id": 397133, "bbox": [102.49, 118.47, 226.08, 349.63], "category_id": 1, "id": 200887}
        ],
        "categories": [{"supercategory": "person", "id": 1, "name": "person", "keypoints": ["nose"], "skeleton": [[16, 14]]}]
    }"#;

    #[test]
    fn parse_keypoints_document() -> Result<()> {
        let set: AnnotationSet = serde_json::from_str(SAMPLE)?;
        assert_eq!(set.images.len(), 1);
        assert_eq!(set.annotations.len(), 1);

        let image = &set.images[0];
        assert_eq!((image.id, image.width, image.height), (397133, 640, 427));
        assert_eq!(image.license, Some(4.into()));
        assert!(image.flickr_url.is_none());
        assert!(image.extra.is_empty());

        let ann = &set.annotations[0];
        assert_eq!(ann.keypoint_count(), 10);
        assert_eq!(ann.id, Some(200887));
        let keypoints = ann.keypoints.as_ref().unwrap();
        assert_eq!(keypoints.len(), 4);
        assert_eq!(keypoints[3].visibility, Visibility::Visible);
        assert_eq!(ann.iscrowd, Some(0.into()));
        assert!(ann.segmentation.as_ref().unwrap().is_array());
        assert!(set.categories.is_some());
        Ok(())
    }

    #[test]
    fn metadata_passes_through() -> Result<()> {
        let set: AnnotationSet = serde_json::from_str(SAMPLE)?;
        let value = serde_json::to_value(&set)?;
        let orig: Value = serde_json::from_str(SAMPLE)?;

        assert_eq!(value["info"], orig["info"]);
        assert_eq!(value["licenses"], orig["licenses"]);
        assert_eq!(value["categories"], orig["categories"]);
        assert_eq!(value["images"], orig["images"]);

        // COCO key order is kept
        let keys = |value: &Value| -> Vec<String> {
            value.as_object().unwrap().keys().cloned().collect()
        };
        assert_eq!(keys(&value), keys(&orig));
        assert_eq!(keys(&value["images"][0]), keys(&orig["images"][0]));
        assert_eq!(
            keys(&value["annotations"][0]),
            keys(&orig["annotations"][0])
        );
        assert_eq!(
            serde_json::to_string(&value["images"])?,
            serde_json::to_string(&orig["images"])?
        );
        Ok(())
    }

    #[test]
    fn missing_metadata_is_not_invented() -> Result<()> {
        let set: AnnotationSet =
            serde_json::from_str(r#"{"images": [], "annotations": [], "extra_key": [1, 2]}"#)?;
        let value = serde_json::to_value(&set)?;
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("info"));
        assert!(!object.contains_key("categories"));
        assert_eq!(object["extra_key"], serde_json::json!([1, 2]));
        Ok(())
    }

    #[test]
    fn sparse_records_are_written_back_unchanged() -> Result<()> {
        let text = concat!(
            r#"{"images":[{"id":1,"width":2,"height":3}],"#,
            r#""annotations":[{"image_id":1,"category_id":1,"area":20000,"bbox":[1.0,2.0,3.0,4.0],"flag":true}],"#,
            r#""info":null}"#,
        );
        let set: AnnotationSet = serde_json::from_str(text)?;
        let ann = &set.annotations[0];
        assert_eq!(ann.id, None);
        assert_eq!(ann.keypoint_count(), 0);
        assert_eq!(ann.area_value(), 20000.0);
        assert_eq!(set.info, Some(Value::Null));

        let written = serde_json::to_string(&set)?;
        assert_eq!(
            written,
            concat!(
                r#"{"info":null,"images":[{"height":3,"width":2,"id":1}],"#,
                r#""annotations":[{"area":20000,"image_id":1,"bbox":[1.0,2.0,3.0,4.0],"category_id":1,"flag":true}]}"#,
            )
        );
        Ok(())
    }

    #[test]
    fn annotation_rect() {
        let ann: Annotation = serde_json::from_value(serde_json::json!({
            "id": 7, "image_id": 1, "category_id": 1, "area": 1.0,
            "bbox": [1.0, 2.0, -3.0, 4.0],
        }))
        .unwrap();
        assert!(matches!(
            ann.rect(),
            Err(DatasetError::InvalidBBox {
                annotation_id: Some(7),
                ..
            })
        ));
    }
}
