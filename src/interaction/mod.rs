pub mod aim;
