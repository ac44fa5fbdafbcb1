use lottie_shape::model::{PathShape, ShapeElement};

use crate::coords::CoordMapping;
use crate::error::ExportError;
use crate::index::PropertyIndexer;
use crate::param::LayerParams;
use crate::path;

/// Name of the spline parameter on Synfig region and outline layers.
pub const BLINE_PARAM: &str = "bline";

/// Builds the path shape block for one layer: the `"sh"` element with the
/// supplied index among its sibling shape elements and the encoded `ks`
/// property.
///
/// The property indexer lives for exactly this conversion; properties added
/// to the same block later (fills, strokes) must draw their ordinals from
/// the same indexer at their own call sites.
pub fn path_shape(
    params: &LayerParams,
    layer_index: u32,
    mapping: &CoordMapping,
) -> Result<PathShape, ExportError> {
    let mut indexer = PropertyIndexer::new();
    let spline = params.spline(BLINE_PARAM)?;
    tracing::trace!(
        layer_index,
        points = spline.point_count(),
        animated = spline.is_animated(),
        "encoding bline parameter"
    );
    let ks = path::encode_spline(spline, mapping, indexer.next());
    Ok(PathShape {
        nm: None,
        ix: layer_index,
        ks,
    })
}

/// Same as [`path_shape`], wrapped in the `"ty"`-tagged element for callers
/// that serialize the block directly.
pub fn shape_element(
    params: &LayerParams,
    layer_index: u32,
    mapping: &CoordMapping,
) -> Result<ShapeElement, ExportError> {
    path_shape(params, layer_index, mapping).map(ShapeElement::Path)
}
