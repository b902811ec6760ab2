//! 사용자 CRUD 백엔드
//!
//! 싱글톤 매크로 기반 의존성 주입 컨테이너를 MongoDB 드라이버에 연결하고,
//! 단일 "User" 리소스에 대한 HTTP 엔드포인트를 노출하는 예제 서비스입니다.
//! NestJS + Mongoose 튜토리얼의 구조(Controller → Service → Model)를
//! Rust 생태계(actix-web + mongodb)로 옮긴 것입니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: 생성, 전체/단건 조회, 삭제
//! - **DTO 검증**: validator 크레이트 기반 요청 페이로드 형태 검증
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 사용자 데이터 영구 저장, pre-save 로깅 훅
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 엔티티↔DTO 변환, 404 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_crud_backend::services::users::UserService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//!
//! // 사용자 생성 및 목록 조회
//! let created = user_service.create_user(request).await?;
//! let users = user_service.list_users().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
