pub mod artwork_id;
pub mod endpoint;
pub mod like;
pub mod page;
pub mod sort;

pub use artwork_id::{ArtworkId, ArtworkIdError};
pub use endpoint::{like_path, LikeRequest, CONTENT_TYPE_JSON, CSRF_HEADER};
pub use like::{icon_class_edit, ClassEdit, ClassTarget, LikeError, LikeResponse, LikeUpdate};
pub use page::PageSelectors;
pub use sort::{with_sort_param, SortUrlError, SORT_PARAM};
