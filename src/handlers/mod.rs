//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! NestJS의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Controller
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Provider
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Model
//! ├─────────────────────────────────────────────┤
//!   MongoDB                                      ← 저장소
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## NestJS와의 비교
//!
//! ### NestJS Controller
//! ```typescript
//! @Controller('users')
//! export class UsersController {
//!   constructor(private readonly usersService: UsersService) {}
//!
//!   @Post()
//!   create(@Body() createUserDto: CreateUserDto) {
//!     return this.usersService.create(createUserDto);
//!   }
//!
//!   @Get()
//!   findAll() {
//!     return this.usersService.findAll();
//!   }
//! }
//! ```
//!
//! ### 이 모듈의 Rust 구현
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_user(
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let service = UserService::instance(); // 싱글톤 패턴
//!     let response = service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! 모든 핸들러는 `async/await` 기반으로 논블로킹 처리되며,
//! `Result<HttpResponse, AppError>`를 반환하여 에러가 `?` 연산자로
//! 전파되고 자동으로 적절한 HTTP 응답으로 변환됩니다.

pub mod users;
