pub mod seaorm;

pub use seaorm::SeaOrmOrderRepository;
