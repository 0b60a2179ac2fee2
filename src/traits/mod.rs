pub mod hess_dual_ops;
