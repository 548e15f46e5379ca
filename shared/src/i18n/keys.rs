//! Translation keys referenced by the views.
//!
//! Every constant here must be present in every locale resource; the table
//! tests iterate [`ALL`] to enforce that.

pub const WEB_WALLET: &str = "webWallet";
pub const WHY: &str = "why";
pub const CLOVER_WALLET: &str = "cloverWallet";

pub const SUPPORT_BLOCKCHAIN: &str = "supportBlockChain";
pub const SUPPORT_BLOCKCHAIN_HINT: &str = "supportBlockChainHint";
pub const MULTI_CHAIN_CONNECT: &str = "multiChainConnect";
pub const MULTI_CHAIN_CONNECT_HINT: &str = "multiChainConnectHint";
pub const APP_STORE: &str = "appStore";
pub const APP_STORE_HINT: &str = "appStoreHint";
pub const CROSS_CHAIN: &str = "crossChain";
pub const CROSS_CHAIN_HINT: &str = "crossChainHint";

pub const NAV_HOME: &str = "navHome";
pub const NAV_FEATURES: &str = "navFeatures";
pub const NAV_DOWNLOAD: &str = "navDownload";

pub const NOT_FOUND_TITLE: &str = "notFoundTitle";
pub const NOT_FOUND_BODY: &str = "notFoundBody";
pub const GO_HOME: &str = "goHome";

pub const ALL: &[&str] = &[
    WEB_WALLET,
    WHY,
    CLOVER_WALLET,
    SUPPORT_BLOCKCHAIN,
    SUPPORT_BLOCKCHAIN_HINT,
    MULTI_CHAIN_CONNECT,
    MULTI_CHAIN_CONNECT_HINT,
    APP_STORE,
    APP_STORE_HINT,
    CROSS_CHAIN,
    CROSS_CHAIN_HINT,
    NAV_HOME,
    NAV_FEATURES,
    NAV_DOWNLOAD,
    NOT_FOUND_TITLE,
    NOT_FOUND_BODY,
    GO_HOME,
];
