//! 공용 유틸리티 모듈
//!
//! - [`display_terminal`] - 서비스 레지스트리 초기화 과정의 터미널 출력 포맷팅

pub mod display_terminal;
