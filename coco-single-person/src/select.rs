//! Primary person selection.

use crate::{coco::Annotation, common::*, config::FilterConfig, remap::remap_annotation};

/// The verdict of the eligibility predicate on one annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eligibility {
    Eligible,
    WrongCategory,
    SmallArea,
    FewKeypoints,
}

impl FilterConfig {
    /// Check an annotation alone, regardless of the others on the same image.
    pub fn check(&self, ann: &Annotation) -> Eligibility {
        if ann.category_id != self.person_category_id {
            Eligibility::WrongCategory
        } else if ann.area_value() < self.min_area.raw() {
            Eligibility::SmallArea
        } else if ann.keypoint_count() < self.min_keypoints {
            Eligibility::FewKeypoints
        } else {
            Eligibility::Eligible
        }
    }
}

/// Counters gathered during selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStats {
    pub num_annotations: usize,
    pub wrong_category: usize,
    pub small_area: usize,
    pub few_keypoints: usize,
    /// Number of images receiving their first candidate.
    pub selected: usize,
    /// Number of times a candidate was replaced by a later annotation.
    pub replaced: usize,
}

impl fmt::Display for SelectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            num_annotations,
            wrong_category,
            small_area,
            few_keypoints,
            selected,
            replaced,
        } = *self;
        write!(
            f,
            "{} annotations, {} selected, {} replaced, rejected: {} category, {} area, {} keypoints",
            num_annotations, selected, replaced, wrong_category, small_area, few_keypoints
        )
    }
}

/// The selected primary person per image.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Remapped annotations indexed by image id, ordered by first selection.
    pub people: IndexMap<u64, Annotation>,
    pub stats: SelectionStats,
}

/// Keep at most one person annotation per image.
///
/// Annotations are visited in order. The first eligible annotation of an
/// image becomes its candidate. A later eligible one replaces the candidate
/// when it has more keypoints *or* a larger area. Every accepted annotation is
/// remapped on its own by [remap_annotation].
pub fn select_primary_people<'a, I>(
    annotations: I,
    filter: &FilterConfig,
    rounding: Rounding,
) -> Result<Selection>
where
    I: IntoIterator<Item = &'a Annotation>,
{
    let mut people: IndexMap<u64, Annotation> = IndexMap::new();
    let mut stats = SelectionStats::default();

    for ann in annotations {
        stats.num_annotations += 1;

        match filter.check(ann) {
            Eligibility::Eligible => {}
            Eligibility::WrongCategory => {
                stats.wrong_category += 1;
                continue;
            }
            Eligibility::SmallArea => {
                stats.small_area += 1;
                continue;
            }
            Eligibility::FewKeypoints => {
                stats.few_keypoints += 1;
                continue;
            }
        }

        match people.entry(ann.image_id) {
            IndexMapEntry::Vacant(entry) => {
                entry.insert(remap_annotation(ann, rounding)?);
                stats.selected += 1;
            }
            IndexMapEntry::Occupied(mut entry) => {
                let candidate = entry.get();
                if ann.keypoint_count() > candidate.keypoint_count()
                    || ann.area_value() > candidate.area_value()
                {
                    debug!(
                        "annotation {:?} replaces annotation {:?} on image {}",
                        ann.id, candidate.id, ann.image_id
                    );
                    entry.insert(remap_annotation(ann, rounding)?);
                    stats.replaced += 1;
                }
            }
        }
    }

    Ok(Selection { people, stats })
}
