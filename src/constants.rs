/// Page size assumed by the page-number pagination driver
pub const DEFAULT_PAGE_SIZE: usize = 25;
/// Hard ceiling on the number of pages requested by the page-number driver
pub const MAX_PAGES: u32 = 100;
/// Number of messages the API returns per request on the messages endpoint
pub const MESSAGES_PAGE_SIZE: usize = 20;
/// Hard ceiling on the number of messages accumulated by the cursor driver
pub const MAX_MESSAGES: usize = 10_000;
/// Property under which the API nests list results
pub const DEFAULT_ITEMS_PROPERTY: &str = "payload";
/// Header carrying the user or platform access token
pub const ACCESS_TOKEN_HEADER: &str = "api_access_token";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("chatwoot-client/", env!("CARGO_PKG_VERSION"));
/// Root of the account-scoped API
pub const ACCOUNT_API_PATH: &str = "/api/v1/accounts";
/// Root of the platform (super-admin) API
pub const PLATFORM_API_PATH: &str = "/platform/api/v1";
/// Root of the public client API
pub const PUBLIC_API_PATH: &str = "/public/api/v1/inboxes";
/// Path of the inbound webhook endpoint
pub const WEBHOOK_PATH: &str = "/webhook";
/// Events the platform can deliver to an account webhook
pub const SUPPORTED_WEBHOOK_EVENTS: [&str; 10] = [
    "conversation_created",
    "conversation_updated",
    "conversation_status_changed",
    "conversation_typing_on",
    "conversation_typing_off",
    "message_created",
    "message_updated",
    "contact_created",
    "contact_updated",
    "webwidget_triggered",
];
