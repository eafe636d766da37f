#[macro_export]
macro_rules! get_roomcheck_setting {
    ($setting:ident) => {
        ::std::env::var(stringify!($setting))
            .unwrap_or(roomcheck_core::config::$setting.to_string())
    };
    ($setting:ident, usize) => {
        match ::std::env::var(stringify!($setting)) {
            Ok(v) => match v.parse() {
                Ok(i) => i,
                Err(_e) => {
                    ::log::warn!(
                        "Env var setting {}, is not a valid unsigned integer. Using default",
                        stringify!($setting)
                    );
                    roomcheck_core::config::$setting
                }
            },
            Err(_e) => roomcheck_core::config::$setting,
        }
    };
}
