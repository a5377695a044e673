pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

/// Generation of the data model exported below. Bump when a wire shape changes.
pub const SCHEMA_VERSION: u32 = 2;

// One canonical shape per entity (keeps call-sites clean)
pub use app::{BottleService, CreatedBottle, CreatedComment, LikeOutcome, RecordLedger, ServiceError};
pub use domain::contract::{
    ContractBottle, ContractComment, ConversionError, RawContractBottle, RawContractComment,
};
pub use domain::model::{
    Bottle, BottleWithContent, Comment, CommentWithContent, FeedItem, RawBottle, RawComment,
};
pub use domain::user::{AuthState, LikeLedger, User, UserLike, UserLimits, UserSession};
pub use storage::ipfs::{
    BottleContent, CommentContent, ContentStore, IpfsContent, IpfsError, IpfsErrorCode,
    MemoryContentStore, UploadResult,
};
pub use domain::api::responses::{ApiResponse, ErrorResponse, PaginatedResponse, SuccessResponse};
pub use domain::api::requests::{
    BottleFilterParams, CommentFilterParams, CreateBottleRequest, CreateCommentRequest,
    LikeBottleRequest, Pagination, PaginationParams, UnlikeBottleRequest,
};
