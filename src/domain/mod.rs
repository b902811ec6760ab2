//! 도메인 모델 모듈
//!
//! 영속 엔티티와 요청/응답 DTO를 분리하여 관리합니다.
//! NestJS 프로젝트의 `schemas/` + `dto/` 디렉터리 구조에 해당합니다.

pub mod entities;
pub mod dto;
