//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반의 설정 로딩을 담당합니다.
//! NestJS의 `ConfigModule.forRoot()`가 `.env`를 읽어 주입하는 것과 같은
//! 역할로, 프로세스 시작 시 한 번 읽어 사용합니다.

pub mod server_config;

pub use server_config::*;
