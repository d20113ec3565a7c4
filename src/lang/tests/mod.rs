mod keyword_test;
