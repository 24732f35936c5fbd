pub mod decompose;
pub mod displace;
pub mod intersection;
pub mod rectangular;
