#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
      $crate::log::LogDispatcher::dispatch(
        &$logger,
        $crate::log::Level::Error,
        &[$(&$value as &dyn ::std::fmt::Display),*],
      )
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
      $crate::log::LogDispatcher::dispatch(
        &$logger,
        $crate::log::Level::Warn,
        &[$(&$value as &dyn ::std::fmt::Display),*],
      )
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
      $crate::log::LogDispatcher::dispatch(
        &$logger,
        $crate::log::Level::Info,
        &[$(&$value as &dyn ::std::fmt::Display),*],
      )
    };
}
