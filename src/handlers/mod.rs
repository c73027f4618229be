pub mod wallets;

pub use wallets::{
    create_wallet,
    delete_wallet,
    list_wallets,
    list_wallets_by_type,
    list_wallets_by_user,
    update_wallet,
    WalletTypeQuery,
    WALLET_DELETED,
};
