pub mod dto;
pub mod query;
pub mod record;

pub use dto::{
    AllOrdersRequest, AllOrdersResponse, CreateCdlArgs, DeleteCdlArgs, MarkAttentionArgs,
    MarkCheckArgs, OrderDetailArgs, ResetCdlVendorDateArgs, UpdateOrderArgs,
};
pub use query::{FilterArgs, FilterOption, SorterArgs, ViewArgs};
pub use record::{CdlOnlyFields, CdlOrder, GeneralOrder, OrderRecord};
