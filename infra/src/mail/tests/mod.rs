mod create_sender_tests;
