mod codec_tests;
mod inspector_tests;
