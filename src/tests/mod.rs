//! モジュール横断テスト
