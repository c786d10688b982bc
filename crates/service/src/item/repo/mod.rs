pub mod seaorm;

pub use seaorm::SeaOrmItemRepository;
