pub mod dignity;
pub mod pathway;
pub mod polygenic;
