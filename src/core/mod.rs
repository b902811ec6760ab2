//! # Core Framework Module
//!
//! NestJS의 코어 컨테이너에 해당하는 기능을 제공하는 모듈입니다.
//!
//! - [`registry`] — 싱글톤 의존성 주입 컨테이너 (`ServiceLocator`)
//! - [`errors`] — 통합 에러 타입 (`AppError`) 및 HTTP 응답 변환
//!
//! | NestJS | 이 프레임워크 |
//! |--------|---------------|
//! | `@Injectable()` | `#[service]` / `#[repository]` |
//! | 애플리케이션 컨텍스트 | `ServiceLocator` |
//! | 생성자 주입 | `Arc<T>` 필드 자동 주입 |
//! | `HttpException` | `AppError` + `ResponseError` |

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
